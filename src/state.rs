//! Shared application state.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::domain::repositories::UrlRepository;

/// State injected into every handler.
///
/// The store handle is the only state shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<dyn UrlRepository>>,
}

impl AppState {
    /// Builds the state around any store implementation.
    pub fn new(repository: Arc<dyn UrlRepository>, alias_length: usize) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(repository, alias_length)),
        }
    }
}
