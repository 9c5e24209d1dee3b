//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Session Errors**: Missing, expired or forged bearer tokens
/// - **Account Errors**: Duplicate sign-up, wrong credentials
/// - **Upstream Errors**: Failures reported by (or while reaching) the movie search API
/// - **Internal Errors**: Database, serialization and signing faults
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No bearer token was sent with a protected request.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("No token provided")]
    MissingToken,

    /// Token signature is valid but its `exp` has passed.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Token expired")]
    TokenExpired,

    /// Token is malformed or its signature does not verify.
    ///
    /// Returns HTTP 403 Forbidden.
    #[error("Invalid token")]
    InvalidToken,

    /// A user with the same email already signed up.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("User already exists")]
    UserAlreadyExists,

    /// Unknown email or wrong password. Both cases share one message.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("{0}")]
    InvalidRequest(String),

    /// The search upstream answered but flagged the query as failed
    /// (including "no results").
    ///
    /// Returns HTTP 500 with the upstream message.
    #[error("{0}")]
    Upstream(String),

    /// The search upstream could not be reached or returned garbage.
    #[error("Upstream request failed: {0}")]
    UpstreamRequest(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Token signing failed: {0}")]
    TokenSigning(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// { "error": "Human-readable error message" }
/// ```
///
/// # Status Code Mapping
///
/// - `MissingToken`, `TokenExpired`, `InvalidCredentials` → 401 Unauthorized
/// - `InvalidToken` → 403 Forbidden
/// - `UserAlreadyExists`, `InvalidRequest` → 400 Bad Request
/// - `Upstream` → 500 with the upstream's message
/// - Everything else → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingToken | AppError::TokenExpired | AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::InvalidToken => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::UserAlreadyExists => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(msg) => {
                tracing::warn!("Search upstream reported failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::UpstreamRequest(ref e) => {
                tracing::error!("Search upstream request failed: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Upstream request failed".to_string(),
                )
            }
            AppError::Database(_) | AppError::Serialization(_) | AppError::TokenSigning(_) => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
