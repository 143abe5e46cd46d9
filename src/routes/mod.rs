//! Router tables and the assembled application.

mod common;
mod wish;

pub use common::common_routes;
pub use wish::wish_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body. A wish is a few hundred bytes.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Every route, with request tracing and the body size limit applied.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(wish_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
