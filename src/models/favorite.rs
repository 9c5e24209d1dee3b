//! Favorite movie models.
//!
//! A favorite belongs to the user whose email it carries. The [`Owner`] type
//! is the only way to address favorites in the store, and it can only be
//! obtained from an authenticated session.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Email of the authenticated user that owns a set of favorites.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Owner(String);

impl Owner {
    pub(crate) fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Represents a favorite record from the database.
///
/// `movie` is the client-supplied JSON body serialized to a string. Its shape
/// is not checked.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Favorite {
    pub id: Uuid,
    pub email: String,
    pub movie: String,
    pub created_at: DateTime<Utc>,
}

/// Response body entry for `GET /api/favorite`.
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "email": "paul@example.com",
///   "movie": "{\"Title\":\"Dune\"}"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub id: Uuid,
    pub email: String,
    pub movie: String,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            email: favorite.email,
            movie: favorite.movie,
        }
    }
}
