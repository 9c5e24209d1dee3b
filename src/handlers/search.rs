//! Movie search proxy.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::Value;

use crate::{error::AppError, state::AppState};

/// Query string of `GET /api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    /// Accepted for client compatibility; not forwarded.
    pub title: Option<String>,
}

/// Forward a title search to the movie database.
///
/// # Endpoint
///
/// `GET /api/search?name=<term>`
///
/// # Response
///
/// - **Success (200 OK)**: upstream payload, unchanged
/// - **Error (500)**: upstream reported a failure (including "Movie not found!")
///   or could not be reached
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, AppError> {
    if params.title.is_some() {
        tracing::debug!("Ignoring `title` search parameter");
    }

    let payload = state.omdb.search(params.name.as_deref()).await?;

    Ok(Json(payload))
}
