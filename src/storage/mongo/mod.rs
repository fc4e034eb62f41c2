pub(super) mod error;
mod todos_impl;

use super::{NewTodo, Todo, TodoFilter};
use crate::{
    config::DatabaseSettings,
    storage::{CloseStorage, StorageError},
    utils::measure_metrics::measure_and_record_storage,
};
use async_trait::async_trait;
use error::MongoStartupError;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{ClientOptions, Credential},
    Client, Collection,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Shape of a todo inside the collection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct TodoDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub done: bool,
}

impl TodoDocument {
    fn from_new(id: ObjectId, new_todo: NewTodo) -> Self {
        Self {
            id,
            name: new_todo.name,
            done: new_todo.done,
        }
    }
}

impl From<TodoDocument> for Todo {
    fn from(value: TodoDocument) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            done: value.done,
        }
    }
}

impl From<&TodoFilter> for Document {
    fn from(filter: &TodoFilter) -> Self {
        let mut document = Document::new();
        if let Some(name) = &filter.name {
            document.insert("name", name.as_str());
        }
        if let Some(done) = filter.done {
            document.insert("done", done);
        }
        document
    }
}

enum Connection {
    Ready {
        client: Client,
        todos: Collection<TodoDocument>,
    },
    Unavailable,
}

/// Owns the single mongodb session opened at startup.
pub(crate) struct MongoStorage {
    connection: Connection,
}

impl MongoStorage {
    #[instrument(name = "MongoStorage::connect", skip_all, fields(host = %settings.host, port = settings.port, database = %settings.name))]
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, MongoStartupError> {
        measure_and_record_storage("MongoStorage::connect", || async {
            let mut options =
                ClientOptions::parse(format!("mongodb://{}:{}", settings.host, settings.port).as_str())
                    .await
                    .map_err(MongoStartupError::ParseOptions)?;

            options.app_name = settings.app_name.clone();
            options.server_selection_timeout = Some(settings.server_selection_timeout());
            if let Some(username) = &settings.username {
                let mut credential = Credential::default();
                credential.username = Some(username.clone());
                credential.password = settings.password.clone();
                credential.source = settings.auth_source.clone();
                options.credential = Some(credential);
            }

            let client = Client::with_options(options).map_err(MongoStartupError::CreateClient)?;
            let database = client.database(&settings.name);

            database
                .run_command(doc! { "ping": 1 })
                .await
                .map_err(MongoStartupError::Ping)?;

            info!(collection = %settings.collection, "mongodb answered ping");

            let todos = database.collection::<TodoDocument>(&settings.collection);
            Ok(Self {
                connection: Connection::Ready { client, todos },
            })
        })
        .await
    }

    /// Storage left behind by a failed bootstrap: every operation fails with
    /// `StorageError::NotConnected` until the process is restarted.
    pub fn unavailable() -> Self {
        Self {
            connection: Connection::Unavailable,
        }
    }

    #[cfg(test)]
    pub fn is_connected(&self) -> bool {
        matches!(self.connection, Connection::Ready { .. })
    }

    fn todos(&self) -> Result<&Collection<TodoDocument>, StorageError> {
        match &self.connection {
            Connection::Ready { todos, .. } => Ok(todos),
            Connection::Unavailable => {
                tracing::warn!("mongodb storage used without a connection");
                Err(StorageError::NotConnected)
            }
        }
    }
}

#[async_trait]
impl CloseStorage for MongoStorage {
    #[instrument(name = "MongoStorage::close", skip_all)]
    async fn close(&self) {
        if let Connection::Ready { client, .. } = &self.connection {
            client.clone().shutdown().await;
            info!("mongodb session closed");
        }
    }
}
