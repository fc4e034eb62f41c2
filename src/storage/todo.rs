use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::{StorageError, TodoId};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Todo {
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: TodoId,
    pub name: String,
    pub done: bool,
}

/// Request body of a todo about to be created. Fields are kept as received;
/// the schema is only checked by the storage when the record is created.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct CandidateTodo(Map<String, Value>);

impl CandidateTodo {
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Schema check shared by every storage backend. Unknown fields are dropped.
    pub(crate) fn validate(&self) -> Result<NewTodo, StorageError> {
        let name = match self.0.get("name") {
            None | Some(Value::Null) => {
                return Err(StorageError::Validation("Name property missing".into()))
            }
            Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
            Some(_) => {
                return Err(StorageError::Validation(
                    "Name property must be a non-empty string".into(),
                ))
            }
        };

        let done = match self.0.get("done") {
            None | Some(Value::Null) => {
                return Err(StorageError::Validation("Done property missing".into()))
            }
            Some(Value::Bool(done)) => *done,
            Some(_) => {
                return Err(StorageError::Validation(
                    "Done property must be a boolean".into(),
                ))
            }
        };

        Ok(NewTodo { name, done })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewTodo {
    pub name: String,
    pub done: bool,
}

impl NewTodo {
    pub(crate) fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            name: self.name,
            done: self.done,
        }
    }
}

/// Equality constraints for listing todos. The default filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub name: Option<String>,
    pub done: Option<bool>,
}

impl TodoFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.done.is_none()
    }

    pub(crate) fn matches(&self, todo: &Todo) -> bool {
        self.name.as_ref().is_none_or(|name| *name == todo.name)
            && self.done.is_none_or(|done| done == todo.done)
    }
}
