use crate::config::Config;
use crate::services::nursery::Nursery;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub nursery: Arc<Mutex<Nursery>>,
    pub config: Config,
}

impl AppState {
    pub fn new(nursery: Nursery, config: Config) -> Self {
        Self {
            nursery: Arc::new(Mutex::new(nursery)),
            config,
        }
    }
}
