//! Calculator constants loaded from a TOML file.
//!
//! ```toml
//! # every key is optional
//! cups_per_liter = 4.22675
//! liters_per_bag = 2.5
//! preview_max_dimension = 180.0
//! ```

use std::path::Path;

use soil_core::{CalculatorConfig, CalculatorConfigError};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading the calculator config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Invalid(#[from] CalculatorConfigError),
}

/// Parses and validates config text.
pub fn parse_config(text: &str) -> Result<CalculatorConfig, ConfigError> {
    parse_with_path(text, "<inline>")
}

fn parse_with_path(
    text: &str,
    path: &str,
) -> Result<CalculatorConfig, ConfigError> {
    let config: CalculatorConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// Loads the config file at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<CalculatorConfig, ConfigError> {
    let Some(path) = path else {
        debug!("no config file given; using default constants");
        return Ok(CalculatorConfig::default());
    };

    let shown = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: shown.clone(),
        source,
    })?;
    let config = parse_with_path(&text, &shown)?;
    info!(path = %shown, ?config, "loaded calculator config");
    Ok(config)
}
