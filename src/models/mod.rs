//! Data models representing database entities and API payloads.

/// Favorite movie model and owner handle
pub mod favorite;
/// User model and sign-up / sign-in payloads
pub mod user;
