//! Hourly rate table.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::error::{FacilityError, FacilityResult};
use crate::types::VehicleCategory;

/// Hourly rates per vehicle category, mutable at runtime.
///
/// There is no historical versioning: a rate change affects future
/// settlements only, because a ticket's fee is fixed at settlement time and
/// never revised.
#[derive(Debug)]
pub struct RateTable {
    rates: RwLock<HashMap<VehicleCategory, Decimal>>,
}

impl RateTable {
    /// Build a table from initial rates
    pub fn new(initial: HashMap<VehicleCategory, Decimal>) -> Self {
        Self {
            rates: RwLock::new(initial),
        }
    }

    /// Hourly rate for a category
    pub fn hourly_rate(&self, category: VehicleCategory) -> FacilityResult<Decimal> {
        self.rates
            .read()
            .get(&category)
            .copied()
            .ok_or(FacilityError::UnknownCategory { category })
    }

    /// Replace the hourly rate for a category.
    ///
    /// Only categories seeded at construction can be updated. The
    /// enumeration is fixed, so a missing entry is a defensive error path.
    pub fn set_hourly_rate(
        &self,
        category: VehicleCategory,
        hourly_rate: Decimal,
    ) -> FacilityResult<()> {
        let mut rates = self.rates.write();
        match rates.get_mut(&category) {
            Some(entry) => {
                *entry = hourly_rate;
                Ok(())
            }
            None => Err(FacilityError::UnknownCategory { category }),
        }
    }

    /// Cloned snapshot of all rates
    pub fn snapshot(&self) -> HashMap<VehicleCategory, Decimal> {
        self.rates.read().clone()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new(default_rates())
    }
}

/// Default hourly rates: compact 10, standard 20, oversized 30
pub fn default_rates() -> HashMap<VehicleCategory, Decimal> {
    HashMap::from([
        (VehicleCategory::Compact, Decimal::new(10, 0)),
        (VehicleCategory::Standard, Decimal::new(20, 0)),
        (VehicleCategory::Oversized, Decimal::new(30, 0)),
    ])
}
