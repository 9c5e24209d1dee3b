//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::repository::Store;
use crate::services::omdb_client::OmdbClient;
use crate::services::token_service::TokenService;

/// Immutable components built once at startup.
///
/// Cloning is cheap: every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub tokens: Arc<TokenService>,
    pub omdb: Arc<OmdbClient>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, tokens: TokenService, omdb: OmdbClient) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
            omdb: Arc::new(omdb),
        }
    }
}
