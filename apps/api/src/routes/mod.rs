pub mod health;
pub mod index;
pub mod predict;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::handle_panic;
use crate::state::AppState;

/// Upload ceiling for `/predict`, applied to the whole request body.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/healthz", get(health::health_handler))
        .route(
            "/predict",
            post(predict::predict_handler).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
