//! Logging Setup
//!
//! Installs a `tracing` subscriber from [`LoggingConfig`]. Native hosts write
//! to stdout; the browser shell supplies its own writer.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Errors raised while installing the subscriber
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {error}")]
    Filter { filter: String, error: String },

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Install the global subscriber writing to stdout
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    init_with_writer(config, std::io::stdout)
}

/// Install the global subscriber with a custom writer
pub fn init_with_writer<W>(config: &LoggingConfig, writer: W) -> Result<(), LoggingError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = build_filter(&config.level)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(config.ansi)
        .with_target(true);

    let result = match (config.format.as_str(), config.timestamps) {
        ("json", true) => builder.json().try_init(),
        ("json", false) => builder.json().without_time().try_init(),
        (_, true) => builder.try_init(),
        (_, false) => builder.without_time().try_init(),
    };

    result.map_err(|e| LoggingError::Init(e.to_string()))
}

fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level).map_err(|e| LoggingError::Filter {
        filter: level.to_string(),
        error: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_directives() {
        assert!(build_filter("info").is_ok());
        assert!(build_filter("silvess=debug,reqwest=warn").is_ok());
    }

    #[test]
    fn test_filter_rejects_garbage() {
        let err = build_filter("silvess=loud").unwrap_err();
        assert!(matches!(err, LoggingError::Filter { .. }));
    }
}
