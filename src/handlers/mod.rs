pub mod health;
pub mod index;
pub mod metrics_handler;
pub mod report;

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::config::Config;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ArcSwap<Config>>,
}

impl AppState {
    pub fn new(config: Arc<ArcSwap<Config>>) -> Self {
        Self { config }
    }
}
