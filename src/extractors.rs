//! Request extractors with JSON error bodies.

use axum::{
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde_json::{Map, Value};

use crate::error::AppError;

/// `axum::Json` whose rejections render as `{"error": "..."}` with status 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Opaque movie record posted to `POST /api/favorite`.
///
/// # Body Handling
///
/// - Non-JSON (or missing) `Content-Type`: the body is ignored and treated as `{}`
/// - JSON object or array: accepted as-is
/// - Any other JSON value (string, number, bool, null): 400 Bad Request
#[derive(Debug)]
pub struct MovieBody(pub Value);

impl<S> FromRequest<S> for MovieBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self(Value::Object(Map::new())));
        }

        let AppJson(value) = AppJson::<Value>::from_request(req, state).await?;
        if value.is_object() || value.is_array() {
            Ok(Self(value))
        } else {
            Err(AppError::InvalidRequest(
                "Request body must be a JSON object or array".to_string(),
            ))
        }
    }
}

/// `application/json` or any `+json` media type, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
