use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Response type for health check endpoint
#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for page handlers
///
/// The only failure a handler owns is a template render failure; everything
/// else (unmatched routes, transport errors) is surfaced by the framework.
#[derive(Debug)]
pub enum PageError {
    /// Template rendering error
    TemplateError(askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::TemplateError(err) => {
                tracing::error!("Template render failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render page",
                )
                    .into_response()
            }
        }
    }
}

impl From<askama::Error> for PageError {
    fn from(err: askama::Error) -> Self {
        PageError::TemplateError(err)
    }
}
