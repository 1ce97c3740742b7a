//! Running price total.

use super::traits::TicketVisitor;
use crate::ticket::{RegularTicket, VipTicket};

/// Sums the price of every visited ticket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TotalPriceVisitor {
    total: f64,
}

impl TotalPriceVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of prices visited so far. Starts at `0.0`.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Fold in the total of a visitor that walked a disjoint partition.
    pub fn merge(&mut self, other: TotalPriceVisitor) {
        self.total += other.total;
    }
}

impl TicketVisitor for TotalPriceVisitor {
    fn visit_regular(&mut self, ticket: &RegularTicket) {
        self.total += ticket.price();
    }

    fn visit_vip(&mut self, ticket: &VipTicket) {
        self.total += ticket.price();
    }
}
