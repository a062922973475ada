//! Category commands.

use uuid::Uuid;
use validator::Validate;

use crate::api::ApiClient;
use crate::error::AppError;
use crate::models::{Category, CategoryInput};

fn print_category(category: &Category) {
    println!("[{}] {}: {}", category.id, category.name, category.description);
}

/// List every category.
pub async fn run_list(client: &ApiClient) -> Result<(), AppError> {
    match client.list_categories().await {
        Ok(categories) => {
            if categories.is_empty() {
                println!("No categories");
            }
            for category in &categories {
                print_category(category);
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to load categories: {}", e);
            println!("Error loading data. Please try again later.");
            Ok(())
        }
    }
}

/// Show one category.
pub async fn run_show(client: &ApiClient, id: Uuid) -> Result<(), AppError> {
    let category = client.get_category(id).await?;
    print_category(&category);
    Ok(())
}

/// Create a category.
pub async fn run_create(
    client: &ApiClient,
    name: String,
    description: String,
) -> Result<(), AppError> {
    let input = CategoryInput { name, description };
    input.validate()?;

    let category = client.create_category(&input).await?;
    println!("Created category {}", category.id);
    Ok(())
}

/// Update a category.
pub async fn run_update(
    client: &ApiClient,
    id: Uuid,
    name: String,
    description: String,
) -> Result<(), AppError> {
    let input = CategoryInput { name, description };
    input.validate()?;

    let category = client.update_category(id, &input).await?;
    print_category(&category);
    Ok(())
}

/// Delete a category.
pub async fn run_delete(client: &ApiClient, id: Uuid) -> Result<(), AppError> {
    client.delete_category(id).await?;
    println!("Deleted category {}", id);
    Ok(())
}
