//! Product listing endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use catalog::Catalog;

use crate::AppState;

/// GET /products — the whole catalog as a JSON array, in catalog order.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Catalog> {
    metrics::counter!("catalog_listings_total").increment(1);
    tracing::debug!(count = state.catalog.len(), "listing products");
    Json(state.catalog.clone())
}
