//! Favorite movies of the authenticated user.

use serde_json::Value;

use crate::error::AppError;
use crate::models::favorite::{Favorite, Owner};
use crate::repository::{FavoriteRepository, Store};

/// Serialize `movie` and store it under `owner`.
///
/// Returns the serialized string exactly as stored.
pub async fn add_favorite(
    store: &dyn Store,
    owner: &Owner,
    movie: &Value,
) -> Result<String, AppError> {
    let serialized = serde_json::to_string(movie)?;

    let favorite = store.insert_favorite(owner, serialized).await?;
    tracing::info!(favorite_id = %favorite.id, "Favorite saved");

    Ok(favorite.movie)
}

pub async fn list_favorites(store: &dyn Store, owner: &Owner) -> Result<Vec<Favorite>, AppError> {
    store.list_favorites(owner).await
}
