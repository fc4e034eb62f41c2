use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::storage::{
    CandidateTodo, CloseStorage, StorageError, Todo, TodoFilter, TodoId, TodoStorage,
};
use crate::trace_err;

/// Process-local document store with the same schema rules as the mongodb
/// backend. Records are kept in insertion order.
#[derive(Default)]
pub struct MemoryStorage {
    todos: RwLock<Vec<Todo>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(todos: Vec<Todo>) -> Self {
        Self {
            todos: RwLock::new(todos),
        }
    }
}

#[async_trait]
impl TodoStorage for MemoryStorage {
    #[instrument(name = "MemoryStorage::create_todo", skip_all)]
    async fn create(&self, candidate: CandidateTodo) -> Result<Todo, StorageError> {
        let todo = trace_err!(candidate.validate(), "todo rejected by schema")?
            .into_todo(TodoId::new());

        info!(todo_id = %todo.id, "insert todo");

        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    #[instrument(name = "MemoryStorage::find_todos", skip_all)]
    async fn find(&self, filter: TodoFilter) -> Result<Vec<Todo>, StorageError> {
        Ok(self
            .todos
            .read()
            .await
            .iter()
            .filter(|todo| filter.matches(todo))
            .cloned()
            .collect())
    }

    #[instrument(name = "MemoryStorage::find_todo_by_id", skip_all)]
    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, StorageError> {
        let todo_id: TodoId = trace_err!(id.parse(), "malformed todo id")?;

        Ok(self
            .todos
            .read()
            .await
            .iter()
            .find(|todo| todo.id == todo_id)
            .cloned())
    }
}

#[async_trait]
impl CloseStorage for MemoryStorage {
    async fn close(&self) {
        let count = self.todos.read().await.len();
        info!(count, "dropping in-memory todos");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_util::TestStorageBuilder;
    use serde_json::json;

    fn candidate(value: serde_json::Value) -> CandidateTodo {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find_by_id() {
        let storage = MemoryStorage::new();

        let created = storage
            .create(candidate(json!({"name": "Buy milk", "done": false})))
            .await
            .unwrap();
        assert_eq!(created.name, "Buy milk");
        assert!(!created.done);

        let found = storage
            .find_by_id(&created.id.to_string())
            .await
            .unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_by_unknown_id() {
        let storage = MemoryStorage::new();

        let found = storage.find_by_id("664db3bc169ce6cb3c60a3a7").await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_find_by_malformed_id() {
        let storage = MemoryStorage::new();

        let result = storage.find_by_id("42").await;
        assert!(matches!(result, Err(StorageError::InvalidId(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_candidate() {
        let storage = MemoryStorage::new();

        let result = storage.create(candidate(json!({"name": "Buy milk"}))).await;
        assert!(matches!(result, Err(StorageError::Validation(m)) if m == "Done property missing"));

        assert!(storage.find(TodoFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_keeps_insertion_order() {
        let builder = TestStorageBuilder::new().with_todos(5);
        let expected = builder.todos();
        let storage = builder.build().await;

        let todos = storage.find(TodoFilter::default()).await.unwrap();
        assert_eq!(todos, expected);
    }

    #[tokio::test]
    async fn test_find_with_filter() {
        let builder = TestStorageBuilder::new().with_todos(6);
        let storage = builder.build().await;

        let done = storage
            .find(TodoFilter {
                done: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(done.len(), 3);
        assert!(done.iter().all(|todo| todo.done));

        let by_name = storage
            .find(TodoFilter {
                name: Some("todo 4".into()),
                done: None,
            })
            .await
            .unwrap();
        assert_eq!(by_name.len(), 1);
    }
}
