//! Logging conventions.
//!
//! Facility operations emit `tracing` events with structured fields. This
//! module names the standard field keys and operation labels so log output
//! stays uniform across the engine.
//!
//! | Level | Usage |
//! |-------|-------|
//! | WARN  | Recoverable state mismatches, admissions that found no spot |
//! | INFO  | Completed operations: admission, release, payment, rate change |
//! | DEBUG | Candidate walk details during admission |

/// Standard log field names
pub mod fields {
    /// Operation name
    pub const OPERATION: &str = "operation";
    /// License plate
    pub const PLATE: &str = "plate";
    /// Ticket identifier
    pub const TICKET_ID: &str = "ticket_id";
    /// Level number
    pub const LEVEL: &str = "level";
    /// Spot number
    pub const SPOT: &str = "spot";
    /// Billed fee
    pub const FEE: &str = "fee";
    /// Error message
    pub const ERROR: &str = "error";
}

/// Operation labels used in the `operation` field
pub mod operations {
    /// Vehicle admission
    pub const ADMIT: &str = "admit";
    /// Vehicle release and settlement
    pub const RELEASE: &str = "release";
    /// Payment collection
    pub const PAY: &str = "pay";
    /// Rate table update
    pub const SET_RATE: &str = "set_rate";
}
