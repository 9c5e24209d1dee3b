//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, query string, session identity)
//! 2. Delegates to a service
//! 3. Returns HTTP response (JSON, status code)

pub mod favorites;
pub mod health;
pub mod root;
pub mod search;
pub mod users;
