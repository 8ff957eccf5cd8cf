//! Carpark Core - Facility Allocation & Billing Engine
//!
//! This crate provides the in-process engine for a multi-level parking
//! facility:
//! - **Allocation**: assign an arriving vehicle to the first compatible free
//!   spot across the facility's levels
//! - **Occupancy**: per-spot atomic occupy/release transitions
//! - **Billing**: time-based fees, partial hours rounded up, rates mutable
//!   at runtime
//! - **Settlement**: exit stamping fixes the fee once; payment is idempotent
//!
//! # Invariants
//!
//! | Invariant | Core Requirement |
//! |-----------|------------------|
//! | **Spot exclusivity** | A spot holds at most one vehicle; racing occupiers resolve to one winner |
//! | **Size compatibility** | A spot accepts a vehicle only when `spot.unit_size >= category.unit_size` |
//! | **One ticket per plate** | At most one active ticket per plate, even under concurrent admission |
//! | **Settle once** | Exit time and fee are fixed together, exactly once, never revised |
//! | **Idempotent payment** | Paying an already-paid ticket is a no-op reporting the same amount |
//!
//! # Core Types
//!
//! - [`Facility`]: orchestrator owning levels, ticket registry and rates
//! - [`Level`] / [`Spot`](allocation::Spot): physical capacity
//! - [`Ticket`]: one parking session and its billed fee
//! - [`RateTable`](billing::RateTable): hourly rate per vehicle category
//! - [`Clock`]: injectable time source for deterministic tests
//!
//! # Example
//!
//! ```
//! use carpark_core::{Facility, FacilityConfig, Vehicle};
//!
//! let facility = Facility::new(FacilityConfig::default()).unwrap();
//!
//! let car = Vehicle::standard("KA-01-AB-1234", "Red", "Honda Accord");
//! let ticket = facility.admit(car).unwrap();
//!
//! let settled = facility.release(&ticket.vehicle.plate).unwrap();
//! let receipt = facility.pay(&settled.vehicle.plate).unwrap();
//! assert!(!receipt.already_paid);
//! ```

pub mod allocation;
pub mod billing;
pub mod clock;
pub mod config;
pub mod error;
pub mod facility;
pub mod logging;
pub mod types;

// Re-export error types
pub use error::{FacilityError, FacilityResult};

// Re-export domain types
pub use types::{PlateNumber, Ticket, TicketId, TicketStatus, Vehicle, VehicleCategory};

// Re-export allocation
pub use allocation::{Level, LevelStatus, SpotSnapshot, SpotStatus};

// Re-export billing
pub use billing::{billable_hours, session_fee, RateTable};

// Re-export clock
pub use clock::{Clock, ManualClock, SystemClock};

// Re-export config
pub use config::{FacilityConfig, LevelLayout};

// Re-export the orchestrator
pub use facility::{Facility, FacilityStatus, PaymentReceipt};

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
