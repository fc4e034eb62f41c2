use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    handlers::error::AppError,
    storage::{CandidateTodo, Todo, TodoFilter, TodoStorage},
    utils::measure_metrics::measure_and_record_service,
};

pub struct ServiceTodoRef {
    storage: Arc<dyn TodoStorage>,
}

impl ServiceTodoRef {
    pub(crate) fn new(storage: Arc<dyn TodoStorage>) -> Self {
        Self { storage }
    }

    #[instrument(name = "Service::todo::create", skip_all, fields(field_count = candidate.fields().len()))]
    pub(crate) async fn create(&self, candidate: CandidateTodo) -> Result<Todo, AppError> {
        measure_and_record_service("create_todo", || async {
            self.storage.create(candidate).await
        })
        .await
        .map_err(Into::into)
    }

    #[instrument(name = "Service::todo::get_all", skip_all, fields(filter_is_empty = filter.is_empty()))]
    pub(crate) async fn get_all(&self, filter: TodoFilter) -> Result<Vec<Todo>, AppError> {
        info!(filter = ?filter, "get all todos");

        measure_and_record_service("get_all_todos", || async {
            self.storage.find(filter).await
        })
        .await
        .map_err(Into::into)
    }

    #[instrument(name = "Service::todo::get", skip_all)]
    pub(crate) async fn get(&self, todo_id: &str) -> Result<Option<Todo>, AppError> {
        info!(todo_id = %todo_id, "get todo");

        measure_and_record_service("get_todo", || async {
            self.storage.find_by_id(todo_id).await
        })
        .await
        .map_err(Into::into)
    }
}
