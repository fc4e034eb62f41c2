pub(crate) mod error;
mod ids;
mod mongo;
mod todo;

#[cfg(any(test, feature = "integration_tests"))]
mod memory;
#[cfg(any(test, feature = "integration_tests"))]
pub mod test_util;

#[cfg(any(test, feature = "integration_tests"))]
pub use memory::MemoryStorage;
pub(crate) use mongo::{error::MongoStartupError, MongoStorage};

use async_trait::async_trait;
pub use error::StorageError;
pub use ids::TodoId;
pub(crate) use todo::NewTodo;
pub use todo::{CandidateTodo, Todo, TodoFilter};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoStorage: Send + Sync {
    /// Checks the candidate against the todo schema and stores it.
    async fn create(&self, candidate: CandidateTodo) -> Result<Todo, StorageError>;
    async fn find(&self, filter: TodoFilter) -> Result<Vec<Todo>, StorageError>;
    /// `Ok(None)` when the id is well formed but no record has it.
    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, StorageError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CloseStorage: Send + Sync {
    async fn close(&self);
}
