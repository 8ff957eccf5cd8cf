//! Ticket registry keyed by plate.

use std::collections::HashMap;

use crate::types::{PlateNumber, Ticket};

/// Active and settled tickets, keyed by plate.
///
/// `active` holds at most one open ticket per plate. `settled` keeps the most
/// recent settled ticket per plate so it stays retrievable for payment after
/// the vehicle has left.
#[derive(Debug, Default)]
pub(crate) struct TicketBook {
    active: HashMap<PlateNumber, Ticket>,
    settled: HashMap<PlateNumber, Ticket>,
}

impl TicketBook {
    pub(crate) fn has_active(&self, plate: &PlateNumber) -> bool {
        self.active.contains_key(plate)
    }

    pub(crate) fn insert_active(&mut self, ticket: Ticket) {
        self.active.insert(ticket.vehicle.plate.clone(), ticket);
    }

    pub(crate) fn take_active(&mut self, plate: &PlateNumber) -> Option<Ticket> {
        self.active.remove(plate)
    }

    /// Put an active ticket back after a failed release
    pub(crate) fn reinstate_active(&mut self, ticket: Ticket) {
        self.insert_active(ticket);
    }

    pub(crate) fn insert_settled(&mut self, ticket: Ticket) {
        self.settled.insert(ticket.vehicle.plate.clone(), ticket);
    }

    pub(crate) fn settled_mut(&mut self, plate: &PlateNumber) -> Option<&mut Ticket> {
        self.settled.get_mut(plate)
    }

    /// Latest ticket for a plate: the active session if one exists,
    /// otherwise the most recent settled one
    pub(crate) fn get(&self, plate: &PlateNumber) -> Option<&Ticket> {
        self.active.get(plate).or_else(|| self.settled.get(plate))
    }

    pub(crate) fn active_count(&self) -> usize {
        self.active.len()
    }
}
