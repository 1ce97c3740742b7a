//! Line-per-ticket textual description.

use super::traits::TicketVisitor;
use crate::ticket::{RegularTicket, TicketKind, VipTicket};

/// Builds one line per visited ticket: `"<Label> Ticket: $<price>\n"`.
///
/// Prices are written in plain positional notation, never in exponent form,
/// with a `.0` suffix when the value has no fractional digits: `50.0`,
/// `19.99`, `10000000000000000.0`, `0.0000001`. Non-finite values are written
/// as-is (`inf`, `NaN`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionVisitor {
    description: String,
}

impl DescriptionVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text accumulated so far. Empty until the first visit.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Consume the visitor and return the accumulated text.
    pub fn into_description(self) -> String {
        self.description
    }

    /// Append the lines of a visitor that walked the following partition.
    pub fn merge(&mut self, other: DescriptionVisitor) {
        self.description.push_str(&other.description);
    }

    fn push_line(&mut self, kind: TicketKind, price: f64) {
        self.description.push_str(kind.label());
        self.description.push_str(" Ticket: $");
        self.description.push_str(&format_price(price));
        self.description.push('\n');
    }
}

/// `Display` output of `price`, with `.0` appended to finite whole numbers.
fn format_price(price: f64) -> String {
    let mut text = price.to_string();
    if price.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

impl TicketVisitor for DescriptionVisitor {
    fn visit_regular(&mut self, ticket: &RegularTicket) {
        self.push_line(TicketKind::Regular, ticket.price());
    }

    fn visit_vip(&mut self, ticket: &VipTicket) {
        self.push_line(TicketKind::Vip, ticket.price());
    }
}
