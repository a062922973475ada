//! Integration tests for the API client against a mock HTTP server.
//!
//! These cover the wire contract: camelCase payloads with integer status
//! and priority values, bearer token handling, and the mapping from HTTP
//! status codes to application errors.

use mockito::{Matcher, Server};
use serde_json::json;
use uuid::Uuid;

use taskdeck::api::ApiClient;
use taskdeck::auth::{Credentials, LoginRequest};
use taskdeck::error::AppError;
use taskdeck::models::{NewTask, Task, TaskPriority, TaskStatus};

const TASK_ID: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";
const USER_ID: &str = "f47ac10b-58cc-4372-a567-0e02b2c3d479";

fn task_json(id: &str, title: &str, status: u8) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": "",
        "dueDate": null,
        "priority": 1,
        "status": status,
        "assignedTo": null,
        "categories": [],
        "attachments": [],
        "createdAt": "2024-05-01T12:00:00Z",
        "updatedAt": "2024-05-02T12:00:00Z"
    })
}

fn authed_client(base_url: String) -> ApiClient {
    ApiClient::new(base_url).with_credentials(Some(Credentials {
        token: "test-token".to_string(),
        user_id: Some(USER_ID.parse().unwrap()),
    }))
}

#[tokio::test]
async fn test_list_tasks_deserializes_wire_format() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/task")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                task_json(TASK_ID, "Fix bug", 1),
                task_json(USER_ID, "Write docs", 0),
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let tasks = client.list_tasks().await.unwrap();

    mock.assert_async().await;
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].title, "Fix bug");
    assert_eq!(tasks[0].status, TaskStatus::InProgress);
    assert_eq!(tasks[0].priority, TaskPriority::Medium);
    assert_eq!(tasks[1].status, TaskStatus::Todo);
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/task")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = authed_client(server.url());
    let tasks = client.list_tasks().await.unwrap();

    mock.assert_async().await;
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_no_auth_header_when_unauthenticated() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/task")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    client.list_tasks().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_not_found_maps_to_error_with_server_message() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", &*format!("/api/task/{}", TASK_ID))
        .with_status(404)
        .with_body(json!({"error": "Task not found"}).to_string())
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let err = client
        .get_task(TASK_ID.parse().unwrap())
        .await
        .unwrap_err();

    mock.assert_async().await;
    match err {
        AppError::NotFound(message) => assert_eq!(message, "Task not found"),
        other => panic!("Expected NotFound, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthorized_maps_to_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/task")
        .with_status(401)
        .with_body(json!({"message": "Invalid token"}).to_string())
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let err = client.list_tasks().await.unwrap_err();

    match err {
        AppError::Unauthorized(message) => assert_eq!(message, "Invalid token"),
        other => panic!("Expected Unauthorized, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/task")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let err = client.list_tasks().await.unwrap_err();

    match err {
        AppError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("Expected Api error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_update_task_puts_full_snapshot() {
    let mut server = Server::new_async().await;

    let mut task: Task = serde_json::from_value(task_json(TASK_ID, "Fix bug", 0)).unwrap();
    task.status = TaskStatus::Done;

    let mock = server
        .mock("PUT", &*format!("/api/task/{}", TASK_ID))
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "id": TASK_ID,
            "title": "Fix bug",
            "status": 2,
            "priority": 1
        })))
        .with_status(200)
        .with_body(task_json(TASK_ID, "Fix bug", 2).to_string())
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let updated = client.update_task(&task).await.unwrap();

    mock.assert_async().await;
    assert_eq!(updated.status, TaskStatus::Done);
}

#[tokio::test]
async fn test_create_task_sends_exact_payload_without_status() {
    let category_id = "7c9e6679-7425-40de-944b-e07fc1f90ae7";
    let mut server = Server::new_async().await;
    // Exact match: the create payload must not carry a status field.
    let mock = server
        .mock("POST", "/api/task")
        .match_body(Matcher::Json(json!({
            "title": "Write docs",
            "description": "User guide",
            "dueDate": "2024-06-01T00:00:00Z",
            "priority": 2,
            "assignedToId": USER_ID,
            "categoryIds": [category_id]
        })))
        .with_status(201)
        .with_body(task_json(TASK_ID, "Write docs", 0).to_string())
        .create_async()
        .await;

    let new_task = NewTask {
        title: "Write docs".to_string(),
        description: "User guide".to_string(),
        due_date: "2024-06-01T00:00:00Z".parse().unwrap(),
        priority: TaskPriority::High,
        assigned_to_id: USER_ID.parse().unwrap(),
        category_ids: vec![category_id.parse().unwrap()],
    };

    let client = ApiClient::new(server.url());
    let created = client.create_task(&new_task).await.unwrap();

    mock.assert_async().await;
    assert_eq!(created.status, TaskStatus::Todo);
}

#[tokio::test]
async fn test_delete_task() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", &*format!("/api/task/{}", TASK_ID))
        .with_status(204)
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    client.delete_task(TASK_ID.parse().unwrap()).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_tasks_by_user_hits_scoped_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", &*format!("/api/task/user/{}", USER_ID))
        .with_status(200)
        .with_body(json!([task_json(TASK_ID, "Fix bug", 0)]).to_string())
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let tasks = client.tasks_by_user(USER_ID.parse().unwrap()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(tasks.len(), 1);
}

#[tokio::test]
async fn test_login_parses_auth_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::PartialJson(json!({
            "email": "user@example.com",
            "password": "secret123"
        })))
        .with_status(200)
        .with_body(
            json!({
                "token": "issued-token",
                "userId": USER_ID
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let request = LoginRequest {
        email: "user@example.com".to_string(),
        password: "secret123".to_string(),
    };
    let response = client.login(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.token, "issued-token");
    assert_eq!(response.user_id, USER_ID.parse::<Uuid>().unwrap());
}

#[tokio::test]
async fn test_refresh_token_exchanges_current_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/refresh-token")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(
            json!({
                "token": "fresh-token",
                "userId": USER_ID
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = authed_client(server.url());
    let response = client.refresh_token().await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.token, "fresh-token");
}

#[tokio::test]
async fn test_logout_posts_with_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/logout")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .create_async()
        .await;

    let client = authed_client(server.url());
    client.logout().await.unwrap();

    mock.assert_async().await;
}
