//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, handlers, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(handlers::info::INFO_PATH, get(handlers::get_info))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
