//! In-process store used by the test suites.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{FavoriteRepository, Store, UserRepository};
use crate::error::AppError;
use crate::models::favorite::{Favorite, Owner};
use crate::models::user::{NewUser, User};

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    favorites: RwLock<Vec<Favorite>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, AppError> {
        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password: user.password,
            created_at: Utc::now(),
        };
        self.users.write().await.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl FavoriteRepository for MemoryStore {
    async fn insert_favorite(&self, owner: &Owner, movie: String) -> Result<Favorite, AppError> {
        let favorite = Favorite {
            id: Uuid::new_v4(),
            email: owner.as_str().to_string(),
            movie,
            created_at: Utc::now(),
        };
        self.favorites.write().await.push(favorite.clone());
        Ok(favorite)
    }

    async fn list_favorites(&self, owner: &Owner) -> Result<Vec<Favorite>, AppError> {
        let favorites = self.favorites.read().await;
        Ok(favorites
            .iter()
            .filter(|f| f.email == owner.as_str())
            .cloned()
            .collect())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
