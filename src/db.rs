//! Database connection pool and migration management.
//!
//! This module provides utilities for:
//! - Creating the PostgreSQL connection pool shared by [`crate::repository::PgStore`]
//! - Applying the embedded schema migrations for `users` and `favorites`

use sqlx::{Pool, Postgres};

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// The pool is built once at startup and handed to the store; every request
/// borrows a connection from it for the duration of a single query.
///
/// # Arguments
///
/// * `database_url` - connection string from `DATABASE_URL`
///
/// # Configuration
///
/// - Maximum connections: 5
/// - Connections are opened lazily beyond the first one and reused while idle
///
/// # Errors
///
/// Returns an error if:
/// - The connection string cannot be parsed
/// - The PostgreSQL server is unreachable
/// - Authentication against the server fails
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Apply pending migrations from the `migrations/` directory.
///
/// # Migration Files
///
/// - `20250101000001_create_users.sql` - `users` table, indexed (not unique) on `email`
/// - `20250101000002_create_favorites.sql` - `favorites` table, indexed on the owning `email`
///
/// Applied versions are recorded in `_sqlx_migrations`, so restarting the
/// service never re-runs a migration.
///
/// # Errors
///
/// Returns an error if a migration fails to execute or an already applied
/// migration was modified after the fact (checksum mismatch).
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // Embedded at compile time from ./migrations
    sqlx::migrate!("./migrations").run(pool).await
}
