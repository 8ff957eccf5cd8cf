//! Facility configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::billing::rates::default_rates;
use crate::error::{FacilityError, FacilityResult};
use crate::types::VehicleCategory;

/// Spot counts for one level, by category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelLayout {
    /// Size-1 spots
    pub compact_spots: usize,
    /// Size-2 spots
    pub standard_spots: usize,
    /// Size-3 spots
    pub oversized_spots: usize,
}

impl LevelLayout {
    /// Create a layout from per-category counts
    pub fn new(compact_spots: usize, standard_spots: usize, oversized_spots: usize) -> Self {
        Self {
            compact_spots,
            standard_spots,
            oversized_spots,
        }
    }

    /// Total spots on the level
    pub fn total(&self) -> usize {
        self.compact_spots + self.standard_spots + self.oversized_spots
    }
}

/// Facility construction parameters: level layouts and initial hourly rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityConfig {
    /// Levels in registration order; admission searches them in this order
    pub levels: Vec<LevelLayout>,
    /// Initial hourly rates per category, overridable at runtime
    #[serde(default = "default_rates")]
    pub rates: HashMap<VehicleCategory, Decimal>,
}

impl Default for FacilityConfig {
    /// Three levels of 5 compact / 10 standard / 3 oversized spots each
    fn default() -> Self {
        Self {
            levels: vec![LevelLayout::new(5, 10, 3); 3],
            rates: default_rates(),
        }
    }
}

impl FacilityConfig {
    /// Config with the given levels and default rates
    pub fn new(levels: Vec<LevelLayout>) -> Self {
        Self {
            levels,
            rates: default_rates(),
        }
    }

    /// Replace the initial rate table
    pub fn with_rates(mut self, rates: HashMap<VehicleCategory, Decimal>) -> Self {
        self.rates = rates;
        self
    }

    /// Parse and validate a config from JSON
    pub fn from_json_str(json: &str) -> FacilityResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| FacilityError::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a usable facility
    pub fn validate(&self) -> FacilityResult<()> {
        if self.levels.is_empty() {
            return Err(FacilityError::Config {
                reason: "at least one level is required".to_string(),
            });
        }
        if self.levels.iter().all(|layout| layout.total() == 0) {
            return Err(FacilityError::Config {
                reason: "facility has no spots".to_string(),
            });
        }
        for category in VehicleCategory::all() {
            if !self.rates.contains_key(&category) {
                return Err(FacilityError::Config {
                    reason: format!("missing hourly rate for category {category}"),
                });
            }
        }
        Ok(())
    }
}
