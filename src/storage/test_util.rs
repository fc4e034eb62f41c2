#![allow(dead_code)]
use std::sync::Arc;

use crate::{
    service::Service,
    storage::{CloseStorage, MemoryStorage, MongoStorage, Todo, TodoId, TodoStorage},
};

pub static SCENARIO_TODO_ID: &str = "664db3bc169ce6cb3c60a3a7";

pub struct TestStorageBuilder {
    todos: Vec<Todo>,
}

impl TestStorageBuilder {
    pub fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Every even todo is done.
    pub fn with_todos(mut self, count: usize) -> Self {
        self.todos = (0..count)
            .map(|i| Todo {
                id: TodoId::new(),
                name: format!("todo {}", i),
                done: i % 2 == 0,
            })
            .collect();
        self
    }

    pub async fn build(&self) -> Arc<MemoryStorage> {
        Arc::new(MemoryStorage::seeded(self.todos.clone()))
    }

    pub async fn build_service(&self) -> Service {
        let storage = self.build().await;
        Service::new(
            storage.clone() as Arc<dyn TodoStorage>,
            storage as Arc<dyn CloseStorage>,
        )
    }

    /// Service over a storage whose bootstrap failed.
    pub fn unavailable_service() -> Service {
        let storage = Arc::new(MongoStorage::unavailable());
        Service::new(
            storage.clone() as Arc<dyn TodoStorage>,
            storage as Arc<dyn CloseStorage>,
        )
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.todos.clone()
    }
}

impl Default for TestStorageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
