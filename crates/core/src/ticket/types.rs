//! Core ticket data types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::visitor::TicketVisitor;

// ============================================================================
// Ticket Kind
// ============================================================================

/// Fieldless tag for the closed set of ticket variants.
///
/// Mirrors the variants of [`Ticket`] one to one. Useful when a caller only
/// needs to group or label tickets without touching their payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TicketKind {
    /// Standard admission.
    Regular,
    /// VIP admission.
    Vip,
}

impl TicketKind {
    /// Human readable label used in listings and descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            TicketKind::Regular => "Regular",
            TicketKind::Vip => "VIP",
        }
    }
}

impl fmt::Display for TicketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Variant Payloads
// ============================================================================

/// A regular admission ticket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RegularTicket {
    price: f64,
}

impl RegularTicket {
    /// Create a regular ticket with the given price.
    pub fn new(price: f64) -> Self {
        Self { price }
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// A VIP admission ticket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VipTicket {
    price: f64,
}

impl VipTicket {
    /// Create a VIP ticket with the given price.
    pub fn new(price: f64) -> Self {
        Self { price }
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

// ============================================================================
// Ticket
// ============================================================================

/// One sale unit: a closed sum over every ticket variant.
///
/// Tickets are immutable once built. Operations over tickets are written as
/// [`TicketVisitor`] implementations and applied through [`Ticket::accept`],
/// so adding an operation never touches this type.
///
/// Serialized form is internally tagged on `kind`:
///
/// ```toml
/// kind = "vip"
/// price = 200.0
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Ticket {
    Regular(RegularTicket),
    Vip(VipTicket),
}

impl Ticket {
    /// Create a regular ticket.
    pub fn regular(price: f64) -> Self {
        Ticket::Regular(RegularTicket::new(price))
    }

    /// Create a VIP ticket.
    pub fn vip(price: f64) -> Self {
        Ticket::Vip(VipTicket::new(price))
    }

    /// Create a ticket of the given kind.
    pub fn new(kind: TicketKind, price: f64) -> Self {
        match kind {
            TicketKind::Regular => Self::regular(price),
            TicketKind::Vip => Self::vip(price),
        }
    }

    /// Returns the variant tag of this ticket.
    pub fn kind(&self) -> TicketKind {
        match self {
            Ticket::Regular(_) => TicketKind::Regular,
            Ticket::Vip(_) => TicketKind::Vip,
        }
    }

    /// Returns the price regardless of variant.
    pub fn price(&self) -> f64 {
        match self {
            Ticket::Regular(t) => t.price(),
            Ticket::Vip(t) => t.price(),
        }
    }

    /// Dispatch to the visitor method matching this ticket's variant.
    ///
    /// Exactly one `visit_*` call is made per invocation.
    pub fn accept<V: TicketVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Ticket::Regular(t) => visitor.visit_regular(t),
            Ticket::Vip(t) => visitor.visit_vip(t),
        }
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Ticket", self.kind())
    }
}
