//! Parking session tickets.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::vehicle::Vehicle;

/// Ticket identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(pub String);

impl TicketId {
    /// Create a new ticket id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ticket lifecycle status
///
/// Transitions are `Open -> Settled -> Paid`, no skips; `Paid` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Vehicle is parked; no fee computed yet
    Open,
    /// Vehicle has exited; fee is fixed
    Settled,
    /// Fee has been collected
    Paid,
}

/// Record of one vehicle's occupancy session and its billed fee.
///
/// Exit time and fee are populated together, exactly once, at settlement and
/// never revised afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket identifier
    pub ticket_id: TicketId,
    /// The parked vehicle
    pub vehicle: Vehicle,
    /// Level holding the assigned spot
    pub level_number: u32,
    /// Assigned spot number within the level
    pub spot_number: u32,
    /// Entry timestamp, set at admission
    pub entered_at: DateTime<Utc>,
    /// Exit timestamp, set at settlement
    pub exited_at: Option<DateTime<Utc>>,
    /// Billed fee, zero until settlement
    pub fee: Decimal,
    /// Lifecycle status
    pub status: TicketStatus,
}

impl Ticket {
    /// Open a new ticket at admission time
    pub fn open(
        ticket_id: TicketId,
        vehicle: Vehicle,
        level_number: u32,
        spot_number: u32,
        entered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            ticket_id,
            vehicle,
            level_number,
            spot_number,
            entered_at,
            exited_at: None,
            fee: Decimal::ZERO,
            status: TicketStatus::Open,
        }
    }

    /// Whether the session is still occupying a spot
    pub fn is_active(&self) -> bool {
        self.status == TicketStatus::Open
    }

    /// Whether the fee has been collected
    pub fn is_paid(&self) -> bool {
        self.status == TicketStatus::Paid
    }

    /// Fix the exit time and fee. Callers must only settle an open ticket.
    pub(crate) fn settle(&mut self, exited_at: DateTime<Utc>, fee: Decimal) {
        debug_assert_eq!(self.status, TicketStatus::Open);
        self.exited_at = Some(exited_at);
        self.fee = fee;
        self.status = TicketStatus::Settled;
    }

    /// Move a settled ticket to its terminal paid state
    pub(crate) fn mark_paid(&mut self) {
        debug_assert_eq!(self.status, TicketStatus::Settled);
        self.status = TicketStatus::Paid;
    }
}
