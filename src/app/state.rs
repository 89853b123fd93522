//! Application state shared across routes

use std::sync::Arc;

use crate::config::Config;
use crate::store::ProductStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub products: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(config: Config, products: Arc<dyn ProductStore>) -> Self {
        Self {
            config: Arc::new(config),
            products,
        }
    }
}
