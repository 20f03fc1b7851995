use std::sync::Arc;

use tokio::sync::RwLock;
use wordsheet_config::Config;

use crate::status::RunStatus;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub status: Arc<RwLock<RunStatus>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            status: Arc::new(RwLock::new(RunStatus::default())),
        }
    }
}
