use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix for environment variable overrides (e.g. `BOXOFFICE_OUTPUT_FORMAT`)
pub const ENV_PREFIX: &str = "BOXOFFICE_";

/// Layered sources, lowest priority first: built-in defaults, the TOML file
/// (when given), then `BOXOFFICE_*` environment variables.
fn figment(path: Option<&Path>) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if let Some(path) = path {
        figment = figment.merge(Toml::file(path));
    }
    figment.merge(Env::prefixed(ENV_PREFIX).split("_"))
}

fn extract(figment: Figment) -> Result<Config, ConfigError> {
    figment
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from a file that must exist, with environment overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }
    extract(figment(Some(path)))
}

/// Load configuration from `path` if it exists, otherwise from the built-in
/// defaults. Environment overrides apply in both cases.
pub fn load_config_or_default(path: &Path) -> Result<Config, ConfigError> {
    let file = path.exists().then_some(path);
    if file.is_none() {
        tracing::debug!("No config file at {:?}, using built-in defaults", path);
    }
    extract(figment(file))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
