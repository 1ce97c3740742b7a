//! Ticket catalog traversal and variant dispatch.
//!
//! - [`ticket`]: the closed set of ticket variants and their owning collection
//! - [`cursor`]: single-pass cursors decoupling traversal from storage
//! - [`visitor`]: operations applied per variant through double dispatch
//! - [`config`]: catalog and output configuration for the demo driver

pub mod config;
pub mod cursor;
pub mod ticket;
pub mod visitor;

pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, Config,
    ConfigError, OutputConfig, OutputFormat,
};
pub use cursor::{Cursor, CursorError, CursorState, TicketCursor};
pub use ticket::{RegularTicket, Ticket, TicketCollection, TicketKind, VipTicket};
pub use visitor::{DescriptionVisitor, TicketVisitor, TotalPriceVisitor};
