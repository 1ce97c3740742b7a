//! Double dispatch over ticket variants.
//!
//! An operation is written once as a [`TicketVisitor`] and applied to any
//! [`Ticket`](crate::Ticket) through [`Ticket::accept`](crate::Ticket::accept),
//! without the caller knowing which variant it holds.
//!
//! # Architecture
//!
//! ```text
//! ticket.accept(&mut visitor)
//!     Ticket::Regular(t) => visitor.visit_regular(t)
//!     Ticket::Vip(t)     => visitor.visit_vip(t)
//! ```
//!
//! The match has no wildcard arm, so the variant set and the visitor trait
//! can never drift apart.
//!
//! # Visitors
//!
//! - **Total price** (`total_price.rs`): running sum of prices
//! - **Description** (`description.rs`): one labeled line per ticket

mod description;
mod total_price;
mod traits;

pub use description::DescriptionVisitor;
pub use total_price::TotalPriceVisitor;
pub use traits::TicketVisitor;
