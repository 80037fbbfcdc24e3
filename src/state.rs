use std::sync::Arc;

use crate::db::Database;
use crate::service::TaskService;

#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<TaskService>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            tasks: Arc::new(TaskService::new(db)),
        }
    }
}
