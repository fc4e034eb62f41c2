pub(crate) mod error;
pub(crate) mod todo;
pub(crate) mod types;

pub(crate) use crate::service::Service;
use axum::{http::StatusCode, response::IntoResponse};

pub(crate) static GREETING: &str = "express test";

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = String)),
    tag = "meta"
)]
#[tracing::instrument(name = "root", skip_all)]
pub(crate) async fn root() -> &'static str {
    GREETING
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    tag = "meta"
)]
#[tracing::instrument(name = "health", skip_all)]
pub(crate) async fn health() -> impl IntoResponse {
    StatusCode::OK
}
