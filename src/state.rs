use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::RosterState;

#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RwLock<RosterState>>,
}

impl AppState {
    pub fn new(roster: RosterState) -> Self {
        Self {
            roster: Arc::new(RwLock::new(roster)),
        }
    }
}
