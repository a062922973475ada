//! Taskdeck CLI - Kanban board client for the task management API.
//!
//! Commands:
//! - `taskdeck login` / `register` / `logout` / `whoami`: auth flows
//! - `taskdeck board show`: fetch tasks and users, render the three columns
//! - `taskdeck board move <task-id> --to <column> [--index N]`: move a card
//! - `taskdeck task list|show|create|update|delete|by-user|by-category`
//! - `taskdeck category list|show|create|update|delete`
//! - `taskdeck user list|show`
//! - `taskdeck search <query> [filters]`: client-side task search
//!
//! Environment variables:
//! - API_BASE_URL: Base URL of the API (default http://localhost:5258)
//! - TASKDECK_TOKEN: Provide a bearer token without logging in
//! - TASKDECK_TOKEN_PATH: Override the credentials file location

use clap::Parser;

use taskdeck::api::ApiClient;
use taskdeck::cli::{BoardCommands, CategoryCommands, Cli, Commands, TaskCommands, UserCommands};
use taskdeck::commands;
use taskdeck::error::AppError;
use taskdeck::search::SearchParams;

async fn dispatch(cli: Cli, client: ApiClient) -> Result<(), AppError> {
    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::run_login(&client, email, password).await
        }
        Commands::Register {
            username,
            email,
            password,
            first_name,
            last_name,
        } => {
            commands::auth::run_register(&client, username, email, password, first_name, last_name)
                .await
        }
        Commands::Logout => commands::auth::run_logout(&client).await,
        Commands::Whoami => commands::auth::run_whoami(&client).await,

        Commands::Board { command } => match command {
            BoardCommands::Show => commands::board::run_show(&client).await,
            BoardCommands::Move { task_id, to, index } => {
                commands::board::run_move(client, task_id, to, index).await
            }
        },

        Commands::Task { command } => match command {
            TaskCommands::List => commands::tasks::run_list(&client).await,
            TaskCommands::Show { id } => commands::tasks::run_show(&client, id).await,
            TaskCommands::Create {
                title,
                description,
                due,
                priority,
                assignee,
                categories,
            } => {
                commands::tasks::run_create(
                    &client,
                    title,
                    description,
                    due,
                    priority,
                    assignee,
                    categories,
                )
                .await
            }
            TaskCommands::Update {
                id,
                title,
                description,
                due,
                priority,
                status,
            } => {
                commands::tasks::run_update(&client, id, title, description, due, priority, status)
                    .await
            }
            TaskCommands::Delete { id } => commands::tasks::run_delete(&client, id).await,
            TaskCommands::ByUser { user_id } => {
                commands::tasks::run_by_user(&client, user_id).await
            }
            TaskCommands::ByCategory { category_id } => {
                commands::tasks::run_by_category(&client, category_id).await
            }
        },

        Commands::Category { command } => match command {
            CategoryCommands::List => commands::categories::run_list(&client).await,
            CategoryCommands::Show { id } => commands::categories::run_show(&client, id).await,
            CategoryCommands::Create { name, description } => {
                commands::categories::run_create(&client, name, description).await
            }
            CategoryCommands::Update {
                id,
                name,
                description,
            } => commands::categories::run_update(&client, id, name, description).await,
            CategoryCommands::Delete { id } => commands::categories::run_delete(&client, id).await,
        },

        Commands::User { command } => match command {
            UserCommands::List => commands::users::run_list(&client).await,
            UserCommands::Show { id } => commands::users::run_show(&client, id).await,
        },

        Commands::Search {
            query,
            status,
            priority,
            assignee,
            category,
            due,
        } => {
            let params = SearchParams {
                query,
                status,
                priority,
                assignee,
                category,
                due_date: due,
            };
            commands::search::run_search(&client, params).await
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let client = ApiClient::from_env();

    if let Err(e) = dispatch(cli, client).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
