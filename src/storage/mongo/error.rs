use strum::AsRefStr;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug, AsRefStr)]
pub enum MongoStartupError {
    #[error("Failed to parse mongodb client options")]
    ParseOptions(#[source] mongodb::error::Error),

    #[error("Failed to create mongodb client")]
    CreateClient(#[source] mongodb::error::Error),

    #[error("Failed to ping mongodb")]
    Ping(#[source] mongodb::error::Error),
}

#[derive(Error, Debug, AsRefStr)]
pub enum MongoStorageError {
    #[error("Mongodb driver error")]
    Driver(#[from] mongodb::error::Error),
}

impl From<MongoStorageError> for StorageError {
    fn from(value: MongoStorageError) -> Self {
        tracing::error!(error = ?value, error_type = %value.as_ref(), "Storage error");
        Self::Internal(value)
    }
}
