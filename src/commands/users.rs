//! User commands.

use uuid::Uuid;

use crate::api::ApiClient;
use crate::error::AppError;
use crate::models::User;

fn print_user(user: &User) {
    println!(
        "[{}] {} <{}> ({})",
        user.id,
        user.full_name(),
        user.email,
        user.username
    );
}

/// List every user.
pub async fn run_list(client: &ApiClient) -> Result<(), AppError> {
    match client.list_users().await {
        Ok(users) => {
            if users.is_empty() {
                println!("No users");
            }
            for user in &users {
                print_user(user);
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to load users: {}", e);
            println!("Error loading data. Please try again later.");
            Ok(())
        }
    }
}

/// Show one user.
pub async fn run_show(client: &ApiClient, id: Uuid) -> Result<(), AppError> {
    let user = client.get_user(id).await?;
    print_user(&user);
    Ok(())
}
