//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, LogFormat};
use crate::error::ServerError;

/// Installs the global subscriber: an `EnvFilter` built from the configured
/// directive plus a plain or JSON `fmt` layer.
pub fn init(config: &Config) -> Result<(), ServerError> {
    let filter = EnvFilter::new(&config.log_level);
    let json = config.log_format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(filter)
        .with((!json).then(fmt::layer))
        .with(json.then(|| fmt::layer().json()))
        .try_init()?;

    Ok(())
}
