use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller supplied a name that matches nothing upstream, or a malformed request.
    #[error("{0}")]
    BadRequest(String),

    #[error("Upstream request failed: {0}")]
    Upstream(#[source] reqwest::Error),

    #[error("Upstream returned {status} for action {action}")]
    UpstreamStatus { status: u16, action: String },

    #[error("Upstream returned an unreadable response for action {action}: {message}")]
    UpstreamDecode { action: String, message: String },

    #[error("Upstream reported error {code} for action {action}: {message}")]
    UpstreamReported {
        code: i64,
        action: String,
        message: String,
    },
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// reqwest errors carry the request URL, which holds the API key
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Upstream(err.without_url())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!("Request failed with {}: {}", status, self);

        let body = Json(ErrorResponse {
            status: status.as_u16(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
