//! Favorite movie HTTP handlers.
//!
//! Both routes sit behind the session guard and only ever see the
//! favorites of the authenticated user.

use axum::{Extension, Json, extract::State};

use crate::{
    error::AppError,
    extractors::MovieBody,
    middleware::auth::AuthContext,
    models::favorite::FavoriteResponse,
    services::favorite_service,
    state::AppState,
};

/// Save a movie as favorite.
///
/// # Endpoint
///
/// `POST /api/favorite`
///
/// # Request Body
///
/// A JSON object or array, typically one entry of a search result:
///
/// ```json
/// { "Title": "Dune", "Year": "2021", "imdbID": "tt1160419" }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the stored serialization, as a JSON string.
///   A request without a JSON `Content-Type` stores `"{}"`.
/// - **Error (400)**: Body is a JSON scalar or malformed JSON
/// - **Error (401/403)**: Missing, expired or invalid token
/// - **Error (500)**: Database error
pub async fn add_favorite(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    MovieBody(movie): MovieBody,
) -> Result<Json<String>, AppError> {
    let stored =
        favorite_service::add_favorite(state.store.as_ref(), &auth.owner(), &movie).await?;

    Ok(Json(stored))
}

/// List the authenticated user's favorites.
///
/// # Endpoint
///
/// `GET /api/favorite`
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "email": "a@x.com",
///     "movie": "{\"Title\":\"Dune\"}"
///   }
/// ]
/// ```
pub async fn list_favorites(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<FavoriteResponse>>, AppError> {
    let favorites = favorite_service::list_favorites(state.store.as_ref(), &auth.owner()).await?;

    Ok(Json(favorites.into_iter().map(Into::into).collect()))
}
