use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub const FAILURE_MESSAGE: &str = "Sorry, something went wrong";

/// Every way a relay route can fail. All of them answer with the same generic 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no credential configured, set {0}")]
    MissingCredential(&'static str),
    #[error("geocoding returned no results for {0:?}")]
    NoResults(String),
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, FAILURE_MESSAGE).into_response()
    }
}
