//! Report assembled from one traversal of the ticket catalog.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use boxoffice_core::{
    Cursor, CursorError, DescriptionVisitor, Ticket, TicketCollection, TotalPriceVisitor,
};

/// Everything the driver prints about a catalog.
#[derive(Debug, Clone, Serialize)]
pub struct TicketReport {
    pub generated_at: DateTime<Utc>,
    pub ticket_count: usize,
    pub tickets: Vec<Ticket>,
    pub total_price: f64,
    pub description: String,
}

impl TicketReport {
    /// Walk the collection once with a cursor, feeding every ticket to the
    /// total and description visitors.
    pub fn build(collection: &TicketCollection) -> Result<Self, CursorError> {
        let mut cursor = collection.cursor();
        let mut tickets = Vec::with_capacity(collection.len());
        let mut total = TotalPriceVisitor::new();
        let mut description = DescriptionVisitor::new();

        while cursor.has_next() {
            let ticket = cursor.try_next()?;
            ticket.accept(&mut total);
            ticket.accept(&mut description);
            tickets.push(*ticket);
        }

        Ok(Self {
            generated_at: Utc::now(),
            ticket_count: tickets.len(),
            tickets,
            total_price: total.total(),
            description: description.into_description(),
        })
    }

    /// Plain text rendering for terminals.
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for TicketReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available tickets:")?;
        for ticket in &self.tickets {
            writeln!(f, "Ticket Type: {}, Price: ${}", ticket, ticket.price())?;
        }
        writeln!(f)?;
        writeln!(f, "Total Price: ${}", self.total_price)?;
        writeln!(f, "Ticket Descriptions:")?;
        f.write_str(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TicketCollection {
        TicketCollection::new()
            .with_ticket(Ticket::regular(50.0))
            .with_ticket(Ticket::vip(200.0))
            .with_ticket(Ticket::regular(30.0))
    }

    #[test]
    fn test_build_report() {
        let report = TicketReport::build(&sample()).unwrap();

        assert_eq!(report.ticket_count, 3);
        assert_eq!(report.total_price, 280.0);
        assert_eq!(report.tickets[1], Ticket::vip(200.0));
        assert_eq!(
            report.description,
            "Regular Ticket: $50.0\nVIP Ticket: $200.0\nRegular Ticket: $30.0\n"
        );
    }

    #[test]
    fn test_render_text() {
        let report = TicketReport::build(&sample()).unwrap();
        let text = report.render_text();

        assert_eq!(
            text,
            "Available tickets:\n\
             Ticket Type: Regular Ticket, Price: $50\n\
             Ticket Type: VIP Ticket, Price: $200\n\
             Ticket Type: Regular Ticket, Price: $30\n\
             \n\
             Total Price: $280\n\
             Ticket Descriptions:\n\
             Regular Ticket: $50.0\n\
             VIP Ticket: $200.0\n\
             Regular Ticket: $30.0\n"
        );
    }

    #[test]
    fn test_render_text_empty_catalog() {
        let report = TicketReport::build(&TicketCollection::new()).unwrap();
        let text = report.render_text();

        assert!(text.starts_with("Available tickets:\n\n"));
        assert!(text.contains("Total Price: $0\n"));
        assert!(text.ends_with("Ticket Descriptions:\n"));
    }

    #[test]
    fn test_render_json() {
        let report = TicketReport::build(&sample()).unwrap();
        let json = report.render_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["ticket_count"], 3);
        assert_eq!(value["total_price"], 280.0);
        assert_eq!(value["tickets"][1]["kind"], "vip");
        assert_eq!(value["tickets"][1]["price"], 200.0);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_display_writes_listing_then_descriptions() {
        let report = TicketReport::build(&TicketCollection::new().with_ticket(Ticket::vip(19.99)))
            .unwrap();

        assert_eq!(
            format!("{}", report),
            "Available tickets:\n\
             Ticket Type: VIP Ticket, Price: $19.99\n\
             \n\
             Total Price: $19.99\n\
             Ticket Descriptions:\n\
             VIP Ticket: $19.99\n"
        );
    }
}
