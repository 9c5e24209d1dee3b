//! Bearer token session guard.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the token from the Authorization header
//! 2. Verify its signature and expiry
//! 3. Inject the session identity into the request
//! 4. Reject the request with a JSON error otherwise

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{error::AppError, models::favorite::Owner, state::AppState};

/// Session identity attached to authenticated requests.
///
/// Inserted into the request's extension map; handlers extract it with
/// `Extension<AuthContext>`.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
}

impl AuthContext {
    /// Owner handle for the favorites of this session's user.
    pub fn owner(&self) -> Owner {
        Owner::new(self.email.clone())
    }
}

/// Session guard middleware function.
///
/// # Flow
///
/// 1. Read `Authorization: Bearer <token>`
/// 2. No token → 401 `{"error": "No token provided"}`
/// 3. Expired token → 401 `{"error": "Token expired"}`
/// 4. Any other verification failure → 403 `{"error": "Invalid token"}`
/// 5. Valid token → insert `AuthContext` and call the next handler
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .ok_or(AppError::MissingToken)?;

    let claims = state.tokens.verify(token)?;

    let auth_context = AuthContext {
        user_id: claims.id,
        email: claims.email,
    };
    tracing::debug!(user_id = %auth_context.user_id, "Authenticated request");

    request.extensions_mut().insert(auth_context);

    Ok(next.run(request).await)
}

/// Second space-separated word of the header value.
///
/// The scheme word itself is not checked: `Token abc` yields `abc`, which
/// then fails verification rather than counting as a missing token.
fn bearer_token(header: &str) -> Option<&str> {
    header.split(' ').nth(1).filter(|token| !token.is_empty())
}
