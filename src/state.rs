use std::sync::Arc;

use crate::aptoide::SearchService;

/// Shared application state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<dyn SearchService>,
}

impl AppState {
    pub fn new(search: Arc<dyn SearchService>) -> Self {
        Self { search }
    }
}
