//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.

pub mod favorite_service;
pub mod omdb_client;
pub mod token_service;
pub mod user_service;
