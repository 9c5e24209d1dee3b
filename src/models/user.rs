//! User data models and sign-up / sign-in request and response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table. `email` identifies the user for sign-in and
/// favorite ownership but is not constrained to be unique.
///
/// The password is stored exactly as supplied at sign-up.
#[derive(Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Byte-for-byte comparison against the stored password.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.as_bytes() == candidate.as_bytes()
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// A user about to be persisted.
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /api/signup`.
///
/// # JSON Example
///
/// ```json
/// {
///   "username": "paul",
///   "email": "paul@example.com",
///   "password": "arrakis"
/// }
/// ```
///
/// Fields are only checked for presence.
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl SignUpRequest {
    pub fn into_new_user(self) -> Result<NewUser, AppError> {
        Ok(NewUser {
            username: required(self.username, "username")?,
            email: required(self.email, "email")?,
            password: required(self.password, "password")?,
        })
    }
}

/// Request body for `POST /api/signin`.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Email and password pulled out of a sign-in request.
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl SignInRequest {
    pub fn into_credentials(self) -> Result<Credentials, AppError> {
        Ok(Credentials {
            email: required(self.email, "email")?,
            password: required(self.password, "password")?,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::InvalidRequest(format!("{} is required", field)))
}

/// Response body for a successful sign-in.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Response body carrying a human-readable confirmation.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
