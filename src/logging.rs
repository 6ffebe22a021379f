//! Structured logging setup
//!
//! Logs go to stderr so that stdout carries nothing but the haiku.

use std::io;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` wins, otherwise the configured level for this crate
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,omen={level}"))
    })
}

/// Install the global subscriber. Calling it twice is harmless; the second
/// call is ignored.
pub fn init(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(env_filter(&config.level));

    let result = if config.format == "json" {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().pretty().with_target(false).with_writer(io::stderr))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        let config = LoggingConfig::default();
        init(&config);
        init(&config);
    }

    #[test]
    fn test_init_with_each_format() {
        for format in ["pretty", "json"] {
            init(&LoggingConfig {
                level: "info".to_string(),
                format: format.to_string(),
            });
        }
    }

    #[test]
    fn test_env_filter_from_level() {
        let filter = env_filter("debug");
        assert!(!filter.to_string().is_empty());
    }
}
