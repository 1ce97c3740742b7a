//! Single-pass cursors over ticket collections.
//!
//! A cursor decouples traversal from storage: callers only see
//! [`Cursor::has_next`] and [`Cursor::try_next`], never the backing slice.
//!
//! # Example
//!
//! ```
//! use boxoffice_core::{Cursor, Ticket, TicketCollection};
//!
//! let collection = TicketCollection::new()
//!     .with_ticket(Ticket::regular(50.0))
//!     .with_ticket(Ticket::vip(200.0));
//!
//! let mut cursor = collection.cursor();
//! while cursor.has_next() {
//!     let ticket = cursor.try_next()?;
//!     println!("{}: ${}", ticket, ticket.price());
//! }
//! assert!(cursor.try_next().is_err());
//! # Ok::<(), boxoffice_core::CursorError>(())
//! ```

mod error;
mod ticket_cursor;
mod traits;

pub use error::CursorError;
pub use ticket_cursor::TicketCursor;
pub use traits::{Cursor, CursorState};
