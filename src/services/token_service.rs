//! Session token issuing and verification.
//!
//! Tokens are HS256 JWTs signed with the process-wide secret. They carry the
//! user's email and id plus `iat`/`exp`; nothing is persisted and there is no
//! revocation list.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Claims embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub email: String,
    /// User id (matches `users.id`).
    pub id: Uuid,
    /// Issued-at (Unix timestamp, seconds).
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds).
    pub exp: i64,
}

/// Why a token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AppError::TokenExpired,
            TokenError::Invalid => AppError::InvalidToken,
        }
    }
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: TimeDelta,
}

impl TokenService {
    /// Lifetimes too large for `TimeDelta` saturate; `sign` then reports the
    /// overflowing expiry as a signing error.
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            lifetime: TimeDelta::try_hours(expiration_hours).unwrap_or(TimeDelta::MAX),
        }
    }

    /// Issue a token for `user_id`/`email`, valid from now for the configured lifetime.
    pub fn sign(&self, user_id: Uuid, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(self.lifetime)
            .ok_or_else(|| AppError::TokenSigning("token expiry out of range".to_string()))?;
        let claims = SessionClaims {
            email: email.to_string(),
            id: user_id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };
        self.encode(&claims)
    }

    /// Sign an explicit claim set.
    pub fn encode(&self, claims: &SessionClaims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::TokenSigning(e.to_string()))
    }

    /// Check signature and expiry and return the embedded claims.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }

    #[cfg(test)]
    fn lifetime_seconds(&self) -> i64 {
        self.lifetime.num_seconds()
    }
}
