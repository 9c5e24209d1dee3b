//! PostgreSQL-backed store.

use async_trait::async_trait;
use uuid::Uuid;

use super::{FavoriteRepository, Store, UserRepository};
use crate::db::DbPool;
use crate::error::AppError;
use crate::models::favorite::{Favorite, Owner};
use crate::models::user::{NewUser, User};

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        // Email is not unique; the oldest registration wins.
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, created_at
            FROM users
            WHERE email = $1
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, password, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user.username)
        .bind(user.email)
        .bind(user.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl FavoriteRepository for PgStore {
    async fn insert_favorite(&self, owner: &Owner, movie: String) -> Result<Favorite, AppError> {
        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (id, email, movie)
            VALUES ($1, $2, $3)
            RETURNING id, email, movie, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner.as_str())
        .bind(movie)
        .fetch_one(&self.pool)
        .await?;

        Ok(favorite)
    }

    async fn list_favorites(&self, owner: &Owner) -> Result<Vec<Favorite>, AppError> {
        let favorites = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, email, movie, created_at
            FROM favorites
            WHERE email = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(favorites)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
