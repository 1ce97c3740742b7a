//! Ticket data model: the closed set of ticket variants and their owning collection.

mod collection;
mod types;

pub use collection::TicketCollection;
pub use types::{RegularTicket, Ticket, TicketKind, VipTicket};
