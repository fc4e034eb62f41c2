pub(crate) mod todo;

use std::sync::Arc;

use crate::storage::{CloseStorage, TodoStorage};
use todo::ServiceTodoRef;
use tracing::instrument;

/// Owns the storage handles shared by every request.
#[derive(Clone)]
pub struct Service {
    todo_storage: Arc<dyn TodoStorage>,
    close_storage: Arc<dyn CloseStorage>,
}

impl Service {
    pub fn new(todo_storage: Arc<dyn TodoStorage>, close_storage: Arc<dyn CloseStorage>) -> Self {
        Self {
            todo_storage,
            close_storage,
        }
    }

    pub fn todo(&self) -> ServiceTodoRef {
        ServiceTodoRef::new(self.todo_storage.clone())
    }

    #[instrument(name = "Service::close_storage", skip_all)]
    pub async fn close_storage(&self) {
        self.close_storage.close().await
    }
}
