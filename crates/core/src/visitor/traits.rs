//! Trait definitions for the visitor module.

use crate::ticket::{RegularTicket, VipTicket};

/// An operation over the closed set of ticket variants.
///
/// One method per variant. [`Ticket::accept`](crate::Ticket::accept) picks the
/// method matching the ticket's runtime variant, so an implementor never
/// inspects the variant itself. Adding a variant to [`Ticket`](crate::Ticket)
/// adds a required method here, and every visitor must handle it before the
/// crate builds again.
pub trait TicketVisitor {
    /// Handle a regular ticket.
    fn visit_regular(&mut self, ticket: &RegularTicket);

    /// Handle a VIP ticket.
    fn visit_vip(&mut self, ticket: &VipTicket);
}
