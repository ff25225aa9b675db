use crate::config::Config;
use crate::model::ModelClient;
use crate::sync::SyncQueue;
use std::sync::Arc;

/// Everything a request needs, shared across handlers.
pub struct AppState {
    pub config: Arc<Config>,
    pub model: Arc<dyn ModelClient>,
    pub sync: SyncQueue,
}

impl AppState {
    pub fn new(config: Arc<Config>, model: Arc<dyn ModelClient>, sync: SyncQueue) -> Self {
        Self {
            config,
            model,
            sync,
        }
    }
}
