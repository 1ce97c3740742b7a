//! Cursor over a borrowed slice of tickets.

use std::iter::FusedIterator;

use tracing::warn;

use super::error::CursorError;
use super::traits::Cursor;
use crate::ticket::Ticket;

/// Forward-only cursor over a borrowed ticket snapshot.
///
/// The borrow ties the cursor to its collection: the collection cannot be
/// dropped or appended to while the cursor is alive.
#[derive(Debug, Clone)]
pub struct TicketCursor<'a> {
    tickets: &'a [Ticket],
    position: usize,
}

impl<'a> TicketCursor<'a> {
    pub fn new(tickets: &'a [Ticket]) -> Self {
        Self {
            tickets,
            position: 0,
        }
    }

    /// Index of the next ticket to be returned.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of tickets not yet returned.
    pub fn remaining(&self) -> usize {
        self.tickets.len() - self.position
    }

    /// Length of the snapshot this cursor walks.
    pub fn snapshot_len(&self) -> usize {
        self.tickets.len()
    }
}

impl<'a> Cursor for TicketCursor<'a> {
    type Item = &'a Ticket;

    fn has_next(&self) -> bool {
        self.position < self.tickets.len()
    }

    fn try_next(&mut self) -> Result<Self::Item, CursorError> {
        match self.tickets.get(self.position) {
            Some(ticket) => {
                self.position += 1;
                Ok(ticket)
            }
            None => {
                warn!(
                    "Cursor advanced past end of snapshot ({} tickets)",
                    self.tickets.len()
                );
                Err(CursorError::Exhausted {
                    len: self.tickets.len(),
                })
            }
        }
    }
}

impl<'a> Iterator for TicketCursor<'a> {
    type Item = &'a Ticket;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.tickets.get(self.position)?;
        self.position += 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TicketCursor<'_> {}

impl FusedIterator for TicketCursor<'_> {}
