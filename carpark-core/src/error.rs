//! Error types for the facility engine.
//!
//! Every failure is a recoverable per-call condition; nothing here is fatal
//! to the process. The only internal retry anywhere in the engine is the
//! bounded next-candidate walk during admission.

use thiserror::Error;

use crate::types::{PlateNumber, VehicleCategory};

/// Facility operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FacilityError {
    /// No level has a compatible free spot for the vehicle's category.
    #[error("no compatible free spot for category {category}")]
    NoCapacity { category: VehicleCategory },

    /// The plate already holds an active ticket.
    #[error("vehicle {plate} already holds an active ticket")]
    AlreadyParked { plate: PlateNumber },

    /// No ticket is registered for the plate.
    #[error("no ticket found for plate {plate}")]
    TicketNotFound { plate: PlateNumber },

    /// Registry and spot state disagree. Indicates a prior bug, not a
    /// normal user error.
    #[error("inconsistent state: {detail}")]
    InconsistentState { detail: String },

    /// The rate table has no entry for the category.
    #[error("no rate entry for category {category}")]
    UnknownCategory { category: VehicleCategory },

    /// Payment was requested before the session was settled.
    #[error("ticket for plate {plate} is not settled yet")]
    NotSettled { plate: PlateNumber },

    /// The facility configuration is unusable.
    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

/// Result type alias for facility operations
pub type FacilityResult<T> = Result<T, FacilityError>;
