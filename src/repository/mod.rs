//! Persistence boundary for users and favorites.
//!
//! Handlers never touch SQL directly; they go through the [`Store`] trait so
//! the same router runs against PostgreSQL in production and an in-memory
//! store in tests.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::favorite::{Favorite, Owner};
use crate::models::user::{NewUser, User};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// First user registered with `email`, if any.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn insert_user(&self, user: NewUser) -> Result<User, AppError>;
}

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn insert_favorite(&self, owner: &Owner, movie: String) -> Result<Favorite, AppError>;

    /// All favorites of `owner` in insertion order.
    async fn list_favorites(&self, owner: &Owner) -> Result<Vec<Favorite>, AppError>;
}

/// Everything the HTTP layer needs from persistence.
#[async_trait]
pub trait Store: UserRepository + FavoriteRepository {
    /// Cheap round trip used by the health check.
    async fn ping(&self) -> Result<(), AppError>;
}
