mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use boxoffice_core::{
    load_config, load_config_or_default, validate_config, Config, OutputFormat,
};

use report::TicketReport;

/// Default config file, looked up in the working directory
const DEFAULT_CONFIG_PATH: &str = "boxoffice.toml";

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Initialize logging on stderr so stdout only carries the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = resolve_config()?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Catalog size: {}", config.tickets.len());
    info!("Output format: {:?}", config.output.format);

    let collection = config.collection();
    let report = TicketReport::build(&collection).context("Failed to traverse ticket catalog")?;

    match config.output.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!(
            "{}",
            report.render_json().context("Failed to serialize report")?
        ),
    }

    Ok(())
}

/// Load the config named by `BOXOFFICE_CONFIG`, or `boxoffice.toml`.
///
/// An explicitly named file must exist. A missing default file falls back to
/// the built-in demo catalog. `BOXOFFICE_*` overrides apply either way.
fn resolve_config() -> Result<Config> {
    match std::env::var("BOXOFFICE_CONFIG") {
        Ok(path) => {
            let config_path = PathBuf::from(path);
            info!("Loading configuration from {:?}", config_path);
            load_config(&config_path)
                .with_context(|| format!("Failed to load config from {:?}", config_path))
        }
        Err(_) => {
            let config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
            info!("Loading configuration from {:?} (optional)", config_path);
            load_config_or_default(&config_path)
                .with_context(|| format!("Failed to load config from {:?}", config_path))
        }
    }
}
