use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Every ticket price is finite and not negative
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    for (index, ticket) in config.tickets.iter().enumerate() {
        let price = ticket.price();
        if !price.is_finite() || price < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "tickets[{}] ({}) has invalid price {}; prices must be finite and non-negative",
                index, ticket, price
            )));
        }
    }

    Ok(())
}
