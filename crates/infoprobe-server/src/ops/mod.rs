//! Operational HTTP endpoints.
//!
//! - `/metrics` : Prometheus text format, gauges sampled on every scrape

pub mod error;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use infoprobe_core::metrics::TEXT_CONTENT_TYPE;

use crate::app_state::AppState;

pub use error::HttpError;

pub async fn metrics(State(state): State<AppState>) -> Result<Response, HttpError> {
    let sample = state.stats().sample()?;
    state.metrics().observe(&sample, state.uptime());

    let body = state.metrics().render();

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
        body,
    )
        .into_response())
}
