//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. It centralizes error management, providing a consistent way to
//! handle and represent the error conditions a client run can hit, from a
//! rejected request to a malformed form value.
//!
//! Remote failures carry the semantics of the API's HTTP status codes, while
//! local failures (transport, JSON, filesystem, input parsing) get their own
//! variants. `From` trait implementations for `reqwest::Error`,
//! `validator::ValidationErrors`, `serde_json::Error`, `std::io::Error`, and
//! `chrono::ParseError` allow easy conversion using the `?` operator.

use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
///
/// Each variant corresponds to a specific type of error, often carrying a
/// message detailing the issue.
#[derive(Debug)]
pub enum AppError {
    /// The API rejected the request as unauthenticated (HTTP 401).
    Unauthorized(String),
    /// The API rejected the request as malformed (HTTP 400).
    BadRequest(String),
    /// The requested resource does not exist on the API (HTTP 404).
    NotFound(String),
    /// The API rejected the payload as semantically invalid (HTTP 422),
    /// or local input validation failed before a request was made.
    ValidationError(String),
    /// Any other non-success response from the API, with its status code.
    Api { status: u16, message: String },
    /// A transport-level failure from the HTTP client.
    HttpError(String),
    /// A JSON serialization or deserialization failure.
    JsonError(String),
    /// A filesystem failure, typically from the token store.
    IoError(String),
    /// A locally supplied value could not be parsed (dates, identifiers).
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Api { status, message } => {
                write!(f, "API Error ({}): {}", status, message)
            }
            AppError::HttpError(msg) => write!(f, "HTTP Error: {}", msg),
            AppError::JsonError(msg) => write!(f, "JSON Error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO Error: {}", msg),
            AppError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Maps a non-success HTTP status and its extracted message to the
    /// matching variant. Statuses without a dedicated variant become
    /// `AppError::Api`.
    pub fn from_status(status: u16, message: String) -> AppError {
        match status {
            400 => AppError::BadRequest(message),
            401 => AppError::Unauthorized(message),
            404 => AppError::NotFound(message),
            422 => AppError::ValidationError(message),
            _ => AppError::Api { status, message },
        }
    }
}

/// Converts `reqwest::Error` into `AppError::HttpError`.
///
/// Body decoding failures are reported as JSON errors since they occur after
/// a successful exchange.
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> AppError {
        if error.is_decode() {
            AppError::JsonError(error.to_string())
        } else {
            AppError::HttpError(error.to_string())
        }
    }
}

/// Converts `validator::ValidationErrors` into `AppError::ValidationError`.
///
/// The detailed validation messages are preserved.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

/// Converts `serde_json::Error` into `AppError::JsonError`.
impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> AppError {
        AppError::JsonError(error.to_string())
    }
}

/// Converts `std::io::Error` into `AppError::IoError`.
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> AppError {
        AppError::IoError(error.to_string())
    }
}

/// Converts `chrono::ParseError` into `AppError::InvalidInput`.
///
/// This is typically used when a form-supplied date fails to parse.
impl From<chrono::ParseError> for AppError {
    fn from(error: chrono::ParseError) -> AppError {
        AppError::InvalidInput(error.to_string())
    }
}
