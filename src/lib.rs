#![doc = "The `taskdeck` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, the Kanban board state container"]
#![doc = "and its drag reconciliation, the typed API client, auth flows, forms,"]
#![doc = "and client-side search for the taskdeck application. It is used by the"]
#![doc = "main binary (`main.rs`) to parse and dispatch commands."]

pub mod api;
pub mod auth;
pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod search;
