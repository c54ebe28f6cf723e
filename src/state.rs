//! Shared application state for all routes.

use crate::store::CupcakeStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CupcakeStore>,
}

impl AppState {
    pub fn new(store: impl CupcakeStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }
}
