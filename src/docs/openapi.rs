use utoipa::OpenApi;

use crate::handlers::error::AppError;
use crate::storage::{CandidateTodo, Todo};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::health,
        crate::handlers::todo::create,
        crate::handlers::todo::get_all,
        crate::handlers::todo::get,
    ),
    components(
        schemas(Todo, CandidateTodo, AppError),
    ),
    tags(
        (name = "meta", description = "Greeting and liveness endpoints"),
        (name = "todos", description = "Endpoints to create and read todo items"),
    ),
    info(
        title = "Todo API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
