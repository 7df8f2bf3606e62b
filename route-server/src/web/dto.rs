//! Data transfer objects for web requests and responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::RouteOption;
use crate::gemini::RouteError;

/// Request to search for routes.
#[derive(Debug, Deserialize)]
pub struct RouteSearchRequest {
    /// Free-text origin, as the user typed it
    pub origin: String,

    /// Free-text destination, as the user typed it
    pub destination: String,
}

/// Response for a route search.
///
/// The domain types already serialize with the wire field names
/// (`totalDuration`, `locationName`, ...), so they go out as-is.
#[derive(Debug, Serialize)]
pub struct RouteSearchResponse {
    /// Candidate itineraries, in the order the model proposed them
    pub routes: Vec<RouteOption>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// User-displayable error message
    pub error: String,
}

/// Application error type.
///
/// The shell's only job on failure is to hand the contract's user-facing
/// message to the page; classification already happened in the contract.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { status: StatusCode, message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        let status = match &e {
            RouteError::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RouteError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            RouteError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            RouteError::Unauthorized
            | RouteError::EmptyResponse
            | RouteError::MalformedResponse { .. }
            | RouteError::Network(_)
            | RouteError::Api { .. } => StatusCode::BAD_GATEWAY,
        };

        AppError::Upstream {
            status,
            message: e.user_message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Upstream { status, message } => (status, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::error!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
