//! Auth flows: login, register, logout, whoami.
//!
//! A successful login or registration persists the token to the store; the
//! other commands read it back from there.

use validator::Validate;

use crate::api::ApiClient;
use crate::auth::{self, Credentials, LoginRequest, RegisterRequest};
use crate::error::AppError;

/// Log in and persist the returned token.
pub async fn run_login(client: &ApiClient, email: String, password: String) -> Result<(), AppError> {
    let request = LoginRequest { email, password };
    request.validate()?;

    let response = client.login(&request).await?;
    auth::save_credentials(&Credentials {
        token: response.token,
        user_id: Some(response.user_id),
    })?;

    println!("Logged in as user {}", response.user_id);
    Ok(())
}

/// Register a new account and persist the returned token.
pub async fn run_register(
    client: &ApiClient,
    username: String,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
) -> Result<(), AppError> {
    let request = RegisterRequest {
        username,
        email,
        password,
        first_name,
        last_name,
    };
    request.validate()?;

    let response = client.register(&request).await?;
    auth::save_credentials(&Credentials {
        token: response.token,
        user_id: Some(response.user_id),
    })?;

    println!("Registered and logged in as user {}", response.user_id);
    Ok(())
}

/// Invalidate the session server-side and delete the stored token.
pub async fn run_logout(client: &ApiClient) -> Result<(), AppError> {
    if !client.is_authenticated() {
        println!("Not logged in");
        return Ok(());
    }

    if std::env::var("TASKDECK_TOKEN").is_ok() {
        return Err(AppError::InvalidInput(
            "Cannot log out while TASKDECK_TOKEN is set. Unset the variable instead.".to_string(),
        ));
    }

    // Best effort server-side; the local token is removed either way.
    if let Err(e) = client.logout().await {
        log::warn!("Server-side logout failed: {}", e);
    }

    auth::delete_credentials()?;
    println!("Logged out");
    Ok(())
}

/// Show the currently authenticated user.
pub async fn run_whoami(client: &ApiClient) -> Result<(), AppError> {
    if !client.is_authenticated() {
        println!("Not logged in");
        return Ok(());
    }

    match client.user_id() {
        Some(id) => {
            let user = client.get_user(id).await?;
            println!("Logged in as: {} ({})", user.full_name(), user.email);
        }
        None => {
            // Token came from the environment; there is no stored user id.
            println!("Authenticated via TASKDECK_TOKEN");
        }
    }
    Ok(())
}
