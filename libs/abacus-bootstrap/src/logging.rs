//! Logging initialization.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `cfg.level`. Logs go to stderr so stdout stays
/// usable for command output. Calling this twice is a no-op.
///
/// # Errors
/// Returns an error if the filter directive is invalid.
pub fn init_logging(cfg: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cfg.level)
            .map_err(|e| anyhow::anyhow!("invalid logging.level '{}': {e}", cfg.level))?,
    };

    let fmt_layer = match cfg.format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(cfg.ansi)
            .with_target(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_span_events(FmtSpan::CLOSE)
            .boxed(),
    };

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("global subscriber already installed; keeping it");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_directive() {
        let cfg = LoggingConfig {
            level: "calculator=loud".to_owned(),
            ..LoggingConfig::default()
        };
        let result = temp_env::with_var_unset("RUST_LOG", || init_logging(&cfg));
        assert!(result.is_err());
    }

    #[test]
    fn second_init_is_harmless() {
        let cfg = LoggingConfig::default();
        let first = temp_env::with_var_unset("RUST_LOG", || init_logging(&cfg));
        let second = temp_env::with_var_unset("RUST_LOG", || init_logging(&cfg));
        assert!(first.is_ok());
        assert!(second.is_ok());
    }
}
