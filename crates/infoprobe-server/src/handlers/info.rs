use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;

pub const INFO_PATH: &str = "/get_info";

const FALLBACK_HOST: &str = "localhost";

/// Body of `GET /get_info`. Field order is the wire order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InfoResponse {
    #[serde(rename = "APP_VERSION")]
    pub app_version: String,
    #[serde(rename = "APP_TITLE")]
    pub app_title: String,
    #[serde(rename = "MESSAGE")]
    pub message: String,
}

pub async fn root() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, INFO_PATH)])
}

pub async fn get_info(State(state): State<AppState>) -> Json<InfoResponse> {
    let cfg = state.cfg();
    state.metrics().record_info_request(&cfg.version);

    let host = state
        .stats()
        .host_name()
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| FALLBACK_HOST.to_string());

    tracing::debug!(
        version = %cfg.version,
        total = state.metrics().info_requests.get(),
        "get_info served"
    );

    Json(InfoResponse {
        app_version: cfg.version.clone(),
        app_title: cfg.title.clone(),
        message: format!("Hello from {host}"),
    })
}
