use crate::catalog::CatalogStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogStore,
}

impl AppState {
    pub fn new(catalog: CatalogStore) -> Self {
        Self { catalog }
    }
}
