//! Sign-up and sign-in.

use crate::error::AppError;
use crate::models::user::{Credentials, NewUser, User};
use crate::repository::{Store, UserRepository};
use crate::services::token_service::TokenService;

/// Register a new user.
///
/// # Process
///
/// 1. Look up an existing user with the same email
/// 2. Reject with `UserAlreadyExists` if one is found
/// 3. Persist the record as supplied
///
/// The lookup and the insert are separate statements, so two concurrent
/// sign-ups with one email can both succeed.
pub async fn sign_up(store: &dyn Store, new_user: NewUser) -> Result<User, AppError> {
    if store.find_user_by_email(&new_user.email).await?.is_some() {
        return Err(AppError::UserAlreadyExists);
    }

    let user = store.insert_user(new_user).await?;
    tracing::info!(user_id = %user.id, "User signed up");

    Ok(user)
}

/// Check credentials and issue a session token.
///
/// Unknown email and wrong password produce the same `InvalidCredentials` error.
pub async fn sign_in(
    store: &dyn Store,
    tokens: &TokenService,
    credentials: Credentials,
) -> Result<String, AppError> {
    let user = store
        .find_user_by_email(&credentials.email)
        .await?
        .filter(|user| user.password_matches(&credentials.password))
        .ok_or(AppError::InvalidCredentials)?;

    let token = tokens.sign(user.id, &user.email)?;
    tracing::info!(user_id = %user.id, "User signed in");

    Ok(token)
}
