//!
//! # API Client
//!
//! Thin typed client for the task management REST API. Every endpoint the
//! application touches has a method here; callers never build requests
//! themselves. The bearer token, when present, is attached to every
//! outbound request. Requests carry no timeouts and are never retried.

use reqwest::{Client, Method, RequestBuilder};
use uuid::Uuid;

use crate::auth::{self, AuthResponse, Credentials, LoginRequest, RegisterRequest};
use crate::config::Config;
use crate::error::AppError;
use crate::models::{Category, CategoryInput, NewTask, Task, User};

/// Extract a human-readable message from a JSON error body.
///
/// Tries `error`, then `message`, then falls back to the raw body.
fn extract_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = json.get("error").and_then(|v| v.as_str()) {
            return msg.to_string();
        }
        if let Some(msg) = json.get("message").and_then(|v| v.as_str()) {
            return msg.to_string();
        }
    }
    body.to_string()
}

/// Client for the task management API.
pub struct ApiClient {
    client: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl ApiClient {
    /// Create a client against the given base URL, unauthenticated.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            credentials: None,
        }
    }

    /// Create a client from the environment: base URL from `Config`,
    /// credentials from the token store if present.
    pub fn from_env() -> Self {
        let config = Config::from_env();
        Self {
            client: Client::new(),
            base_url: config.api_base_url,
            credentials: auth::load_credentials(),
        }
    }

    /// Replace the client's credentials.
    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Whether the client currently holds a token.
    pub fn is_authenticated(&self) -> bool {
        self.credentials
            .as_ref()
            .map(|c| !c.token.is_empty())
            .unwrap_or(false)
    }

    /// The stored user id, when the credentials carry one.
    pub fn user_id(&self) -> Option<Uuid> {
        self.credentials.as_ref().and_then(|c| c.user_id)
    }

    /// Builds a request for the given path, attaching the bearer token
    /// when one is present.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, &url);
        match &self.credentials {
            Some(creds) if !creds.token.is_empty() => {
                builder.header("Authorization", format!("Bearer {}", creds.token))
            }
            _ => builder,
        }
    }

    /// Map a non-success HTTP response to an `AppError` based on status code.
    async fn check_response(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body);

        Err(AppError::from_status(status_code, message))
    }

    // -- Tasks --

    /// Fetch every task.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, AppError> {
        let response = self.request(Method::GET, "/api/task").send().await?;
        let response = self.check_response(response).await?;
        let result = response.json().await?;
        Ok(result)
    }

    /// Fetch one task by id.
    pub async fn get_task(&self, id: Uuid) -> Result<Task, AppError> {
        let response = self
            .request(Method::GET, &format!("/api/task/{}", id))
            .send()
            .await?;
        let response = self.check_response(response).await?;
        let result = response.json().await?;
        Ok(result)
    }

    /// Create a task. The server assigns id, timestamps, and the initial
    /// Todo status.
    pub async fn create_task(&self, task: &NewTask) -> Result<Task, AppError> {
        let response = self
            .request(Method::POST, "/api/task")
            .json(task)
            .send()
            .await?;
        let response = self.check_response(response).await?;
        let result = response.json().await?;
        Ok(result)
    }

    /// Update a task by sending its full snapshot.
    pub async fn update_task(&self, task: &Task) -> Result<Task, AppError> {
        let response = self
            .request(Method::PUT, &format!("/api/task/{}", task.id))
            .json(task)
            .send()
            .await?;
        let response = self.check_response(response).await?;
        let result = response.json().await?;
        Ok(result)
    }

    /// Delete a task by id.
    pub async fn delete_task(&self, id: Uuid) -> Result<(), AppError> {
        let response = self
            .request(Method::DELETE, &format!("/api/task/{}", id))
            .send()
            .await?;
        self.check_response(response).await?;
        Ok(())
    }

    /// Fetch the tasks assigned to a user.
    pub async fn tasks_by_user(&self, user_id: Uuid) -> Result<Vec<Task>, AppError> {
        let response = self
            .request(Method::GET, &format!("/api/task/user/{}", user_id))
            .send()
            .await?;
        let response = self.check_response(response).await?;
        let result = response.json().await?;
        Ok(result)
    }

    /// Fetch the tasks carrying a category.
    pub async fn tasks_by_category(&self, category_id: Uuid) -> Result<Vec<Task>, AppError> {
        let response = self
            .request(Method::GET, &format!("/api/task/category/{}", category_id))
            .send()
            .await?;
        let response = self.check_response(response).await?;
        let result = response.json().await?;
        Ok(result)
    }

    // -- Categories --

    /// Fetch every category.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let response = self.request(Method::GET, "/api/categories").send().await?;
        let response = self.check_response(response).await?;
        let result = response.json().await?;
        Ok(result)
    }

    /// Fetch one category by id.
    pub async fn get_category(&self, id: Uuid) -> Result<Category, AppError> {
        let response = self
            .request(Method::GET, &format!("/api/categories/{}", id))
            .send()
            .await?;
        let response = self.check_response(response).await?;
        let result = response.json().await?;
        Ok(result)
    }

    /// Create a category.
    pub async fn create_category(&self, category: &CategoryInput) -> Result<Category, AppError> {
        let response = self
            .request(Method::POST, "/api/categories")
            .json(category)
            .send()
            .await?;
        let response = self.check_response(response).await?;
        let result = response.json().await?;
        Ok(result)
    }

    /// Update a category.
    pub async fn update_category(
        &self,
        id: Uuid,
        category: &CategoryInput,
    ) -> Result<Category, AppError> {
        let response = self
            .request(Method::PUT, &format!("/api/categories/{}", id))
            .json(category)
            .send()
            .await?;
        let response = self.check_response(response).await?;
        let result = response.json().await?;
        Ok(result)
    }

    /// Delete a category by id.
    pub async fn delete_category(&self, id: Uuid) -> Result<(), AppError> {
        let response = self
            .request(Method::DELETE, &format!("/api/categories/{}", id))
            .send()
            .await?;
        self.check_response(response).await?;
        Ok(())
    }

    // -- Users --

    /// Fetch every user.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let response = self.request(Method::GET, "/api/user").send().await?;
        let response = self.check_response(response).await?;
        let result = response.json().await?;
        Ok(result)
    }

    /// Fetch one user by id.
    pub async fn get_user(&self, id: Uuid) -> Result<User, AppError> {
        let response = self
            .request(Method::GET, &format!("/api/user/{}", id))
            .send()
            .await?;
        let response = self.check_response(response).await?;
        let result = response.json().await?;
        Ok(result)
    }

    // -- Auth --

    /// Register a new account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AppError> {
        let response = self
            .request(Method::POST, "/api/auth/register")
            .json(request)
            .send()
            .await?;
        let response = self.check_response(response).await?;
        let result = response.json().await?;
        Ok(result)
    }

    /// Log in with email and password.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
        let response = self
            .request(Method::POST, "/api/auth/login")
            .json(request)
            .send()
            .await?;
        let response = self.check_response(response).await?;
        let result = response.json().await?;
        Ok(result)
    }

    /// Exchange the current token for a fresh one.
    pub async fn refresh_token(&self) -> Result<AuthResponse, AppError> {
        let response = self
            .request(Method::POST, "/api/auth/refresh-token")
            .send()
            .await?;
        let response = self.check_response(response).await?;
        let result = response.json().await?;
        Ok(result)
    }

    /// Invalidate the current session server-side.
    pub async fn logout(&self) -> Result<(), AppError> {
        let response = self
            .request(Method::POST, "/api/auth/logout")
            .send()
            .await?;
        self.check_response(response).await?;
        Ok(())
    }
}
