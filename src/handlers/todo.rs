use super::error::AppError;
use super::types::Lookup;
use crate::{
    handlers::Service,
    storage::{CandidateTodo, Todo, TodoFilter},
    utils::RootSpan,
};
use crate::trace_err;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::info;

#[utoipa::path(
    post,
    path = "/todos",
    request_body(
        content = CandidateTodo,
        description = "New ToDo item, `{name, done}`",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "ToDo created", body = Todo),
        (status = 400, description = "ToDo rejected by schema", body = AppError),
        (status = 415, description = "Body is not sent as JSON", body = AppError),
        (status = 422, description = "Body is not a JSON object", body = AppError),
        (status = 503, description = "Storage unavailable", body = AppError),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::create", skip_all)]
pub(crate) async fn create(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    body: Result<Json<CandidateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let Json(candidate) = trace_err!(body, "ToDo body rejected")?;

    match service.todo().create(candidate).await {
        Ok(todo) => {
            root_span.record().todo_id(&todo.id);
            info!(todo = ?todo, "created ToDo");
            Ok((StatusCode::CREATED, Json(todo)))
        }
        Err(e) => {
            tracing::error!(err = ?e, "failed to create ToDo");
            Err(e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "List all todos", body = [Todo]),
        (status = 503, description = "Storage unavailable", body = AppError),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::get_all", skip_all)]
pub(crate) async fn get_all(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = service.todo().get_all(TodoFilter::default()).await?;

    root_span.record().todo_count(todos.len());
    info!("Get {} ToDos", todos.len());

    Ok(Json(todos))
}

#[utoipa::path(
    get,
    path = "/todos/{todo_id}",
    params(
        ("todo_id" = String, Path, description = "ToDo ID")
    ),
    responses(
        (status = 200, description = "Get ToDo by ID", body = Todo),
        (status = 400, description = "Malformed ToDo ID", body = AppError),
        (status = 404, description = "ToDo not found"),
        (status = 503, description = "Storage unavailable", body = AppError),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::get", skip_all)]
pub(crate) async fn get(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    Path(todo_id): Path<String>,
) -> Result<Lookup<Todo>, AppError> {
    root_span.record().todo_id(&todo_id);

    let lookup = Lookup::from(service.todo().get(&todo_id).await?);

    match &lookup {
        Lookup::Found(todo) => info!(todo = ?todo, "Get ToDo"),
        Lookup::Missing => info!(todo_id = %todo_id, "ToDo not found"),
    }

    Ok(lookup)
}
