//! Tracing subscriber setup

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Build the level filter. `RUST_LOG` wins over the configured level.
pub fn env_filter(config: &LoggingConfig, verbose: bool) -> Result<EnvFilter> {
    let level = if verbose { "debug" } else { config.level.as_str() };

    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return Ok(EnvFilter::from_default_env());
    }

    EnvFilter::try_new(level).map_err(|e| anyhow!("Invalid log filter '{level}': {e}"))
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for assessment output.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let filter = env_filter(config, verbose)?;
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.pretty().try_init(),
    };

    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_from_config() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        };
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
            let filter = env_filter(&config, false).unwrap();
            assert_eq!(filter.to_string(), "warn");

            let verbose = env_filter(&config, true).unwrap();
            assert_eq!(verbose.to_string(), "debug");
        }
    }
}
