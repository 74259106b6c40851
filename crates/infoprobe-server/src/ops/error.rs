//! HTTP mapping for [`ProbeError`].
//!
//! Every runtime failure surfaces as a bare 500; details go to the log only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use infoprobe_core::error::ProbeError;

#[derive(Debug)]
pub struct HttpError(pub ProbeError);

impl From<ProbeError> for HttpError {
    fn from(e: ProbeError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        tracing::error!(code = self.0.client_code().as_str(), error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
