//! Account HTTP handlers.
//!
//! - POST /api/signup - Register a new user
//! - POST /api/signin - Exchange email and password for a session token

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    error::AppError,
    extractors::AppJson,
    models::user::{MessageResponse, SignInRequest, SignUpRequest, TokenResponse},
    services::user_service,
    state::AppState,
};

/// Register a new user.
///
/// # Request Body
///
/// ```json
/// { "username": "paul", "email": "a@x.com", "password": "p" }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: `{"message": "User signed up successfully"}`
/// - **Error (400)**: Email already registered, or a field is missing
/// - **Error (500)**: Database error
pub async fn sign_up(
    State(state): State<AppState>,
    AppJson(request): AppJson<SignUpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_user = request.into_new_user()?;
    user_service::sign_up(state.store.as_ref(), new_user).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User signed up successfully".to_string(),
        }),
    ))
}

/// Sign in and receive a bearer token.
///
/// # Request Body
///
/// ```json
/// { "email": "a@x.com", "password": "p" }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"token": "<jwt>"}`
/// - **Error (401)**: `{"error": "Invalid email or password"}`
/// - **Error (500)**: Database or signing error
pub async fn sign_in(
    State(state): State<AppState>,
    AppJson(request): AppJson<SignInRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let credentials = request.into_credentials()?;
    let token =
        user_service::sign_in(state.store.as_ref(), state.tokens.as_ref(), credentials).await?;

    Ok(Json(TokenResponse { token }))
}
