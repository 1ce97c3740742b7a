use serde::{Deserialize, Serialize};

use crate::ticket::{Ticket, TicketCollection};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Ticket catalog, in listing order
    #[serde(default = "default_tickets")]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tickets: default_tickets(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Build an owned collection from the configured catalog.
    pub fn collection(&self) -> TicketCollection {
        self.tickets.iter().copied().collect()
    }
}

fn default_tickets() -> Vec<Ticket> {
    vec![
        Ticket::regular(50.0),
        Ticket::vip(200.0),
        Ticket::regular(30.0),
    ]
}

/// Report output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
