mod common;
use common::{create_test_app, create_unavailable_app, spawn_test_app, ErrorBody};
use reqwest::StatusCode;
use serde_json::json;
use todo_api::{Todo, SCENARIO_TODO_ID};

#[tokio::test]
async fn root_greeting() {
    let handle = spawn_test_app(create_test_app(0).await).await;
    let client = handle.client();

    let res = client.get_root().await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "express test");
}

#[tokio::test]
async fn create_and_get_todo() {
    let handle = spawn_test_app(create_test_app(0).await).await;
    let client = handle.client();

    let res = client
        .create_todo(json!({"name": "Buy milk", "done": false}))
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = res.json::<Todo>().await.unwrap();
    assert_eq!(created.name, "Buy milk");
    assert!(!created.done);

    let res = client.get_todo(&created.id.to_string()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let todo = res.json::<Todo>().await.unwrap();
    assert_eq!(todo, created);
}

#[tokio::test]
async fn created_todo_drops_unknown_fields() {
    let handle = spawn_test_app(create_test_app(0).await).await;
    let client = handle.client();

    let res = client
        .create_todo(json!({"name": "Buy milk", "done": true, "priority": "high"}))
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = res.json::<serde_json::Value>().await.unwrap();
    assert!(body.get("priority").is_none());
    assert!(body.get("_id").is_some());
}

#[tokio::test]
async fn get_all_todos_in_insertion_order() {
    let todo_count = 5;
    let handle = spawn_test_app(create_test_app(todo_count).await).await;
    let client = handle.client();

    let res = client
        .create_todo(json!({"name": "last one", "done": false}))
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client.get_all_todos().await;
    assert_eq!(res.status(), StatusCode::OK);

    let todos = res.json::<Vec<Todo>>().await.unwrap();
    assert_eq!(todos.len(), todo_count + 1);
    assert_eq!(todos[0].name, "todo 0");
    assert!(todos[0].done);
    assert_eq!(todos[todo_count].name, "last one");
}

#[tokio::test]
async fn get_all_todos_empty() {
    let handle = spawn_test_app(create_test_app(0).await).await;
    let client = handle.client();

    let res = client.get_all_todos().await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.json::<Vec<Todo>>().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_missing_todo() {
    let handle = spawn_test_app(create_test_app(3).await).await;
    let client = handle.client();

    let res = client.get_todo(SCENARIO_TODO_ID).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_todo_with_malformed_id() {
    let handle = spawn_test_app(create_test_app(0).await).await;
    let client = handle.client();

    let res = client.get_todo("not-an-object-id").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!(body.error, "invalid_id");
}

#[tokio::test]
async fn create_todo_rejected_by_schema() {
    let handle = spawn_test_app(create_test_app(0).await).await;
    let client = handle.client();

    let res = client.create_todo(json!({"done": false})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!(body.error, "validation");
    assert_eq!(body.message, "Name property missing");

    let res = client.create_todo(json!({"name": "Buy milk"})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!(body.message, "Done property missing");

    let res = client.get_all_todos().await;
    assert!(res.json::<Vec<Todo>>().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_todo_with_non_object_body() {
    let handle = spawn_test_app(create_test_app(0).await).await;
    let client = handle.client();

    for body in [json!([1, 2]), json!(null), json!("Buy milk")] {
        let res = client.create_todo(body).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = res.json::<ErrorBody>().await.unwrap();
        assert_eq!(body.error, "invalid_body");
    }

    let res = client.get_all_todos().await;
    assert!(res.json::<Vec<Todo>>().await.unwrap().is_empty());
}

#[tokio::test]
async fn unavailable_storage_answers_503() {
    let handle = spawn_test_app(create_unavailable_app()).await;
    let client = handle.client();

    let res = client.get_all_todos().await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let res = client.get_todo(SCENARIO_TODO_ID).await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let res = client
        .create_todo(json!({"name": "Buy milk", "done": false}))
        .await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!(body.error, "not_connected");

    let res = client.get_root().await;
    assert_eq!(res.status(), StatusCode::OK);
}
