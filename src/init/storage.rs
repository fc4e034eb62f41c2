use crate::{
    service::Service,
    storage::{CloseStorage, MongoStorage, TodoStorage},
    Settings,
};
use std::sync::Arc;

use tracing::{error, info, instrument};

/// Opens the database session once. A failed attempt is logged and the
/// service starts anyway on top of an unavailable storage; there is no retry.
#[instrument(name = "init_storage", skip_all)]
pub async fn init_storage(settings: &Settings) -> Service {
    let storage = match MongoStorage::connect(&settings.database).await {
        Ok(storage) => {
            info!(
                host = %settings.database.host,
                port = settings.database.port,
                database = %settings.database.name,
                "connected to mongodb"
            );
            storage
        }
        Err(e) => {
            error!(error = ?e, error_type = %e.as_ref(), "Error connecting to mongodb");
            MongoStorage::unavailable()
        }
    };

    let storage = Arc::new(storage);

    Service::new(
        storage.clone() as Arc<dyn TodoStorage>,
        storage as Arc<dyn CloseStorage>,
    )
}
