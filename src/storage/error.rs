use strum_macros::AsRefStr;
use thiserror::Error;

pub use super::mongo::error::MongoStorageError;

#[derive(Error, Debug, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum StorageError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid todo id: {0}")]
    InvalidId(String),

    #[error("Storage is not connected")]
    NotConnected,

    #[error("Internal storage error")]
    Internal(#[source] MongoStorageError),
}
