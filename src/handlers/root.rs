//! Public landing route.

/// `GET /` - plaintext greeting.
pub async fn welcome() -> &'static str {
    "Welcome to the CineSearch Backend API"
}
