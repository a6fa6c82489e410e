//! Startup and serving errors.
//!
//! Request handlers are infallible; everything that can go wrong happens
//! while the process is starting or while the listener is running.

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

use crate::config::ConfigError;

/// Errors that stop the server from starting or keep it from running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The environment holds an invalid setting.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A global tracing subscriber was already installed.
    #[error("failed to initialize tracing: {0}")]
    Tracing(#[from] TryInitError),

    /// The Prometheus recorder could not be installed.
    #[error("failed to install Prometheus recorder: {0}")]
    Metrics(#[from] BuildError),

    /// The listen address could not be bound (e.g. port already in use).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
