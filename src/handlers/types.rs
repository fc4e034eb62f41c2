use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Outcome of a lookup that completed: a missing record is an answer, not an error.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Lookup<T> {
    Found(T),
    Missing,
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(item) => Self::Found(item),
            None => Self::Missing,
        }
    }
}

impl<T: Serialize> IntoResponse for Lookup<T> {
    fn into_response(self) -> Response {
        match self {
            Lookup::Found(item) => (StatusCode::OK, Json(item)).into_response(),
            Lookup::Missing => StatusCode::NOT_FOUND.into_response(),
        }
    }
}
