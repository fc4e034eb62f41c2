#![allow(dead_code)]
use reqwest::Url;

pub struct TestAppClient {
    url: Url,
    client: reqwest::Client,
}

impl TestAppClient {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_root(&self) -> reqwest::Response {
        self.client
            .get(self.url.clone())
            .send()
            .await
            .unwrap()
    }

    pub async fn create_todo(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url.join("todos").unwrap())
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn get_todo(&self, todo_id: &str) -> reqwest::Response {
        self.client
            .get(self.url.join("todos/").unwrap().join(todo_id).unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn get_all_todos(&self) -> reqwest::Response {
        self.client
            .get(self.url.join("todos").unwrap())
            .send()
            .await
            .unwrap()
    }
}
