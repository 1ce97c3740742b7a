//! Owned, append-only ticket storage.

use tracing::{debug, trace};

use super::Ticket;
use crate::cursor::TicketCursor;
use crate::visitor::TicketVisitor;

/// Ordered collection of tickets, preserving insertion order.
///
/// The collection owns its tickets. Cursors borrow it immutably, so the
/// collection cannot be appended to while any cursor over it is alive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketCollection {
    tickets: Vec<Ticket>,
}

impl TicketCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ticket at the end of the collection.
    pub fn add(&mut self, ticket: Ticket) {
        trace!(kind = %ticket.kind(), price = ticket.price(), "Adding ticket");
        self.tickets.push(ticket);
    }

    /// Builder-style variant of [`add`](Self::add).
    pub fn with_ticket(mut self, ticket: Ticket) -> Self {
        self.add(ticket);
        self
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Create a single-pass cursor over the current contents.
    pub fn cursor(&self) -> TicketCursor<'_> {
        debug!("Creating cursor over {} tickets", self.tickets.len());
        TicketCursor::new(&self.tickets)
    }

    /// Apply a visitor to every ticket in insertion order.
    pub fn accept_all<V: TicketVisitor + ?Sized>(&self, visitor: &mut V) {
        for ticket in self.cursor() {
            ticket.accept(visitor);
        }
    }

    /// Split the collection into at most `count` contiguous, disjoint cursors.
    ///
    /// Each cursor can be handed to its own thread together with its own
    /// accumulator; merging the accumulators in the returned order gives the
    /// same result as one sequential pass. Always returns at least one cursor,
    /// and `count == 0` is treated as `1`.
    pub fn partitions(&self, count: usize) -> Vec<TicketCursor<'_>> {
        let count = count.max(1);
        if self.tickets.is_empty() {
            return vec![TicketCursor::new(&self.tickets)];
        }

        let chunk_size = self.tickets.len().div_ceil(count);
        let cursors: Vec<_> = self
            .tickets
            .chunks(chunk_size)
            .map(TicketCursor::new)
            .collect();
        debug!(
            "Partitioned {} tickets into {} cursors (requested {})",
            self.tickets.len(),
            cursors.len(),
            count
        );
        cursors
    }
}

impl FromIterator<Ticket> for TicketCollection {
    fn from_iter<I: IntoIterator<Item = Ticket>>(iter: I) -> Self {
        Self {
            tickets: iter.into_iter().collect(),
        }
    }
}

impl Extend<Ticket> for TicketCollection {
    fn extend<I: IntoIterator<Item = Ticket>>(&mut self, iter: I) {
        for ticket in iter {
            self.add(ticket);
        }
    }
}

impl<'a> IntoIterator for &'a TicketCollection {
    type Item = &'a Ticket;
    type IntoIter = TicketCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}
