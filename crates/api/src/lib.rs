//! HTTP API for the product service.
//!
//! Serves the fixed product catalog and a liveness probe, with structured
//! logging (tracing), Prometheus metrics and a permissive GET-only CORS
//! policy.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use catalog::Catalog;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state accessible from all handlers.
///
/// Built once at startup and never written afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/products", get(routes::products::list))
        .route("/health", get(routes::health::check))
        .with_state(state)
        .merge(metrics_router)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Any origin may read, but only with `GET`.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
}

/// Creates the default application state with the seeded catalog.
pub fn create_default_state() -> Arc<AppState> {
    Arc::new(AppState {
        catalog: Catalog::seeded(),
    })
}
