//! CineSearch backend.
//!
//! A small REST API that signs users up and in, keeps a per-user list of
//! favorite movies, and proxies title searches to OMDb.
//!
//! # Routes
//!
//! | Method | Path             | Auth   | Handler                          |
//! |--------|------------------|--------|----------------------------------|
//! | GET    | `/`              | none   | [`handlers::root::welcome`]      |
//! | GET    | `/health`        | none   | [`handlers::health::health_check`] |
//! | POST   | `/api/signup`    | none   | [`handlers::users::sign_up`]     |
//! | POST   | `/api/signin`    | none   | [`handlers::users::sign_in`]     |
//! | POST   | `/api/favorite`  | bearer | [`handlers::favorites::add_favorite`] |
//! | GET    | `/api/favorite`  | bearer | [`handlers::favorites::list_favorites`] |
//! | GET    | `/api/search`    | bearer | [`handlers::search::search`]     |
//!
//! # Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → session guard (protected routes only) → Handler
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod services;
pub mod state;

use axum::{
    Router,
    http::{HeaderName, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    // Routes that require a valid session token
    let authenticated_routes = Router::new()
        .route(
            "/api/favorite",
            post(handlers::favorites::add_favorite).get(handlers::favorites::list_favorites),
        )
        .route("/api/search", get(handlers::search::search))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        .route("/", get(handlers::root::welcome))
        .route("/health", get(handlers::health::health_check))
        .route("/api/signup", post(handlers::users::sign_up))
        .route("/api/signin", post(handlers::users::sign_in))
        .merge(authenticated_routes)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wildcard CORS policy applied to every response, preflight included.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .expose_headers([HeaderName::from_static("auth-token"), header::CONTENT_LENGTH])
}
