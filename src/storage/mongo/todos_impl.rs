use super::error::MongoStorageError;
use super::{MongoStorage, TodoDocument};
use crate::storage::{CandidateTodo, StorageError, Todo, TodoFilter, TodoId, TodoStorage};
use crate::trace_err;
use crate::utils::measure_metrics::measure_and_record_storage;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use tracing::{info, instrument};

#[async_trait]
impl TodoStorage for MongoStorage {
    #[instrument(name = "MongoStorage::create_todo", skip_all)]
    async fn create(&self, candidate: CandidateTodo) -> Result<Todo, StorageError> {
        let todos = self.todos()?;
        let new_todo = trace_err!(candidate.validate(), "todo rejected by schema")?;

        measure_and_record_storage("MongoStorage::create_todo", || async {
            let document = TodoDocument::from_new(ObjectId::new(), new_todo);

            trace_err!(
                todos.insert_one(&document).await,
                "failed to insert todo into collection"
            )?;

            info!(todo_id = %document.id, "inserted todo");

            Ok::<Todo, MongoStorageError>(document.into())
        })
        .await
        .map_err(Into::into)
    }

    #[instrument(name = "MongoStorage::find_todos", skip_all, fields(filter_is_empty = filter.is_empty()))]
    async fn find(&self, filter: TodoFilter) -> Result<Vec<Todo>, StorageError> {
        let todos = self.todos()?;

        measure_and_record_storage("MongoStorage::find_todos", || async {
            let cursor = trace_err!(
                todos.find(Document::from(&filter)).await,
                "failed to query todo collection"
            )?;

            let documents: Vec<TodoDocument> = trace_err!(
                cursor.try_collect().await,
                "failed to read todo cursor"
            )?;

            info!(count = documents.len(), "found todos");

            Ok::<Vec<Todo>, MongoStorageError>(documents.into_iter().map(Todo::from).collect())
        })
        .await
        .map_err(Into::into)
    }

    #[instrument(name = "MongoStorage::find_todo_by_id", skip_all)]
    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, StorageError> {
        let todos = self.todos()?;
        let todo_id: TodoId = trace_err!(id.parse(), "malformed todo id")?;

        info!(todo_id = %todo_id, "find todo by id");

        measure_and_record_storage("MongoStorage::find_todo_by_id", || async {
            let document = trace_err!(
                todos
                    .find_one(doc! { "_id": ObjectId::from(todo_id) })
                    .await,
                "failed to read todo from collection"
            )?;

            Ok::<Option<Todo>, MongoStorageError>(document.map(Todo::from))
        })
        .await
        .map_err(Into::into)
    }
}
