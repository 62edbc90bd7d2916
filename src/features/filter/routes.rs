use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::filter::handlers;
use crate::features::filter::services::FilterService;

/// Create routes for the cascading filter
pub fn routes(service: Arc<FilterService>) -> Router {
    Router::new()
        .route("/api/filter", get(handlers::get_filter))
        .route("/api/filter/select", post(handlers::select_level))
        .route("/api/filter/reset", post(handlers::reset_filter))
        .with_state(service)
}
