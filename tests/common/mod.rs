#![allow(dead_code, unused_imports)]

mod client;
mod server;

use axum::Router;
pub use client::TestAppClient;
use todo_api::build_app;
use todo_api::TestStorageBuilder;

pub use server::{spawn_test_app, TestAppHandle};

#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

pub async fn create_test_app(todo_count: usize) -> Router {
    let service = TestStorageBuilder::new()
        .with_todos(todo_count)
        .build_service()
        .await;

    build_app(service)
}

pub fn create_unavailable_app() -> Router {
    build_app(TestStorageBuilder::unavailable_service())
}
