//! Facility orchestration.
//!
//! The facility owns every level, the ticket registry and the rate table,
//! and is the sole mutator of the registry. Construct one per process and
//! share it behind an `Arc`; every operation takes `&self` and is safe to
//! call from any number of threads.
//!
//! Concurrency model:
//! - per-spot mutual exclusion lives in [`Spot`]: racing occupiers resolve
//!   to one winner, and the admission walk simply moves on to the next
//!   candidate after a lost race;
//! - per-plate linearizability comes from the registry lock: the plate
//!   check and ticket insertion during admission happen as one atomic step
//!   under the write lock, as do release and payment.
//!
//! Lock order is registry then spot; no spot lock is ever held while the
//! registry lock is being acquired.

mod registry;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::allocation::{Level, LevelStatus, Spot};
use crate::billing::{billable_hours, session_fee, RateTable};
use crate::clock::{Clock, SystemClock};
use crate::config::FacilityConfig;
use crate::error::{FacilityError, FacilityResult};
use crate::logging::operations;
use crate::types::{PlateNumber, Ticket, TicketId, Vehicle, VehicleCategory};

use registry::TicketBook;

/// Confirmation of a collected (or previously collected) payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// The paid ticket
    pub ticket_id: TicketId,
    /// Plate the ticket is registered under
    pub plate: PlateNumber,
    /// Charged amount
    pub amount: Decimal,
    /// True when the ticket was already paid and this call was a no-op
    pub already_paid: bool,
}

/// Point-in-time view of the whole facility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityStatus {
    /// Total spots across all levels
    pub total_spots: usize,
    /// Free spots across all levels
    pub available_spots: usize,
    /// Currently open tickets
    pub active_tickets: usize,
    /// Per-level views in registration order
    pub levels: Vec<LevelStatus>,
}

/// Multi-level parking facility: levels, ticket registry and rate table.
pub struct Facility {
    levels: Vec<Level>,
    registry: RwLock<TicketBook>,
    rates: RateTable,
    clock: Arc<dyn Clock>,
}

impl Facility {
    /// Build a facility from config, stamping tickets with the system clock
    pub fn new(config: FacilityConfig) -> FacilityResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build a facility with an injected time source
    pub fn with_clock(config: FacilityConfig, clock: Arc<dyn Clock>) -> FacilityResult<Self> {
        config.validate()?;
        let levels = config
            .levels
            .iter()
            .enumerate()
            .map(|(index, layout)| Level::new(index as u32 + 1, layout))
            .collect();
        Ok(Self {
            levels,
            registry: RwLock::new(TicketBook::default()),
            rates: RateTable::new(config.rates),
            clock,
        })
    }

    /// Admit a vehicle: occupy the first compatible free spot and issue a
    /// ticket.
    ///
    /// Levels are searched in registration order and spots in creation
    /// order. A candidate lost to a concurrent admission is skipped and the
    /// walk moves to the next one, bounded by the number of compatible
    /// spots. A plate can hold at most one active ticket: admission fails
    /// with [`FacilityError::AlreadyParked`] otherwise, and with
    /// [`FacilityError::NoCapacity`] when no level has a compatible free
    /// spot.
    pub fn admit(&self, vehicle: Vehicle) -> FacilityResult<Ticket> {
        let plate = vehicle.plate.clone();
        if self.registry.read().has_active(&plate) {
            return Err(FacilityError::AlreadyParked { plate });
        }

        for level in &self.levels {
            for spot in level.compatible_spots(vehicle.category) {
                if !spot.try_occupy(&vehicle) {
                    continue;
                }
                return self.issue_ticket(vehicle, spot);
            }
        }

        warn!(
            operation = operations::ADMIT,
            plate = %plate,
            category = %vehicle.category,
            "no compatible free spot"
        );
        Err(FacilityError::NoCapacity {
            category: vehicle.category,
        })
    }

    /// Register a ticket for a freshly occupied spot.
    ///
    /// The plate re-check and the insertion run under one write lock, so two
    /// concurrent admissions for the same plate cannot both succeed: the
    /// loser hands its spot back.
    fn issue_ticket(&self, vehicle: Vehicle, spot: &Spot) -> FacilityResult<Ticket> {
        let plate = vehicle.plate.clone();
        let mut registry = self.registry.write();
        if registry.has_active(&plate) {
            spot.release();
            return Err(FacilityError::AlreadyParked { plate });
        }

        let ticket = Ticket::open(
            TicketId::new(format!("ticket:{}", Uuid::new_v4())),
            vehicle,
            spot.level_number(),
            spot.spot_number(),
            self.clock.now(),
        );
        registry.insert_active(ticket.clone());
        drop(registry);

        info!(
            operation = operations::ADMIT,
            plate = %ticket.vehicle.plate,
            ticket_id = %ticket.ticket_id,
            level = ticket.level_number,
            spot = ticket.spot_number,
            "vehicle admitted"
        );
        Ok(ticket)
    }

    /// Release the vehicle registered under `plate`: free its spot, stamp
    /// the exit time and fix the fee at the rate effective now.
    ///
    /// The settled ticket stays retrievable by plate for payment. A spot
    /// that turns out not to be occupied is reported as
    /// [`FacilityError::InconsistentState`] and the ticket stays active.
    pub fn release(&self, plate: &PlateNumber) -> FacilityResult<Ticket> {
        let mut registry = self.registry.write();
        let mut ticket =
            registry
                .take_active(plate)
                .ok_or_else(|| FacilityError::TicketNotFound {
                    plate: plate.clone(),
                })?;

        let rate = match self.rates.hourly_rate(ticket.vehicle.category) {
            Ok(rate) => rate,
            Err(err) => {
                registry.reinstate_active(ticket);
                return Err(err);
            }
        };

        let Some(spot) = self.spot(ticket.level_number, ticket.spot_number) else {
            let detail = format!(
                "ticket {} references unknown spot {} on level {}",
                ticket.ticket_id, ticket.spot_number, ticket.level_number
            );
            registry.reinstate_active(ticket);
            return Err(FacilityError::InconsistentState { detail });
        };

        if !spot.release() {
            let detail = format!(
                "spot {} on level {} was not occupied at release",
                ticket.spot_number, ticket.level_number
            );
            warn!(
                operation = operations::RELEASE,
                plate = %plate,
                error = %detail,
                "registry and spot state disagree"
            );
            registry.reinstate_active(ticket);
            return Err(FacilityError::InconsistentState { detail });
        }

        let exited_at = self.clock.now();
        let hours = billable_hours(ticket.entered_at, exited_at);
        ticket.settle(exited_at, session_fee(hours, rate));
        registry.insert_settled(ticket.clone());
        drop(registry);

        info!(
            operation = operations::RELEASE,
            plate = %plate,
            ticket_id = %ticket.ticket_id,
            fee = %ticket.fee,
            "vehicle released"
        );
        Ok(ticket)
    }

    /// Collect payment for the settled ticket registered under `plate`.
    ///
    /// Paying an already-paid ticket is a successful no-op reporting the
    /// same amount. Payment before release is rejected with
    /// [`FacilityError::NotSettled`]: a ticket has no amount until
    /// settlement fixes the fee.
    pub fn pay(&self, plate: &PlateNumber) -> FacilityResult<PaymentReceipt> {
        let mut registry = self.registry.write();
        if let Some(ticket) = registry.settled_mut(plate) {
            let already_paid = ticket.is_paid();
            if !already_paid {
                ticket.mark_paid();
            }
            let receipt = PaymentReceipt {
                ticket_id: ticket.ticket_id.clone(),
                plate: plate.clone(),
                amount: ticket.fee,
                already_paid,
            };
            drop(registry);

            info!(
                operation = operations::PAY,
                plate = %plate,
                ticket_id = %receipt.ticket_id,
                fee = %receipt.amount,
                already_paid,
                "payment recorded"
            );
            return Ok(receipt);
        }

        if registry.has_active(plate) {
            return Err(FacilityError::NotSettled {
                plate: plate.clone(),
            });
        }
        Err(FacilityError::TicketNotFound {
            plate: plate.clone(),
        })
    }

    /// Latest ticket registered for `plate`: the active session if one
    /// exists, otherwise the most recent settled one
    pub fn ticket(&self, plate: &PlateNumber) -> Option<Ticket> {
        self.registry.read().get(plate).cloned()
    }

    /// Replace the hourly rate for a category; affects future settlements
    /// only
    pub fn set_rate(&self, category: VehicleCategory, hourly_rate: Decimal) -> FacilityResult<()> {
        self.rates.set_hourly_rate(category, hourly_rate)?;
        info!(
            operation = operations::SET_RATE,
            category = %category,
            rate = %hourly_rate,
            "rate updated"
        );
        Ok(())
    }

    /// Current hourly rate for a category
    pub fn rate(&self, category: VehicleCategory) -> FacilityResult<Decimal> {
        self.rates.hourly_rate(category)
    }

    /// Cloned snapshot of the whole rate table
    pub fn rates(&self) -> HashMap<VehicleCategory, Decimal> {
        self.rates.snapshot()
    }

    /// Levels in registration order
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Free spots across all levels
    pub fn available_count(&self) -> usize {
        self.levels.iter().map(Level::available_count).sum()
    }

    /// Total spots across all levels
    pub fn total_count(&self) -> usize {
        self.levels.iter().map(Level::total_count).sum()
    }

    /// Serializable point-in-time view of every level and spot
    pub fn status(&self) -> FacilityStatus {
        let registry = self.registry.read();
        FacilityStatus {
            total_spots: self.total_count(),
            available_spots: self.available_count(),
            active_tickets: registry.active_count(),
            levels: self.levels.iter().map(Level::status).collect(),
        }
    }

    fn spot(&self, level_number: u32, spot_number: u32) -> Option<&Spot> {
        let index = level_number.checked_sub(1)? as usize;
        self.levels
            .get(index)?
            .spots()
            .iter()
            .find(|spot| spot.spot_number() == spot_number)
    }
}
