//! Bounded history of drawn tickets.

use std::collections::VecDeque;

use crate::ticket::Ticket;

/// Default number of winning tickets kept for display.
pub const MAX_HISTORY_SIZE: usize = 100;

/// Most recent winning tickets, oldest first.
///
/// Once full, every push drops the oldest entry. The total number of pushes is
/// kept so each retained ticket can be shown with its position in the session.
#[derive(Clone, Debug)]
pub struct TicketHistory {
    entries: VecDeque<Ticket>,
    capacity: usize,
    total: u64,
}

impl TicketHistory {
    /// Create an empty history holding at most `capacity` tickets (at least 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
        }
    }

    /// Append a ticket, evicting the oldest if full.
    pub fn push(&mut self, ticket: Ticket) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ticket);
        self.total += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Tickets ever pushed, including evicted ones.
    pub fn total_pushed(&self) -> u64 {
        self.total
    }

    /// Most recently pushed ticket.
    pub fn latest(&self) -> Option<&Ticket> {
        self.entries.back()
    }

    /// Retained tickets, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Ticket> + '_ {
        self.entries.iter()
    }

    /// Retained tickets with their 1-based ordinal in the session.
    pub fn numbered(&self) -> impl Iterator<Item = (u64, &Ticket)> + '_ {
        let first = self.total - self.entries.len() as u64 + 1;
        self.entries
            .iter()
            .enumerate()
            .map(move |(i, ticket)| (first + i as u64, ticket))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.total = 0;
    }
}

impl Default for TicketHistory {
    fn default() -> Self {
        Self::new(MAX_HISTORY_SIZE)
    }
}
