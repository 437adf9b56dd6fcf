//! Application state for the web layer.

use std::sync::Arc;

use crate::catalogue::InMemoryCatalogue;
use crate::config::ServerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Route catalogue, loaded once at startup
    pub catalogue: Arc<InMemoryCatalogue>,

    /// Maximum journeys listed per response
    pub max_results: usize,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalogue: InMemoryCatalogue, config: &ServerConfig) -> Self {
        Self {
            catalogue: Arc::new(catalogue),
            max_results: config.max_results,
        }
    }
}
