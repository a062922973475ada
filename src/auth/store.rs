//!
//! # Token Store
//!
//! Persists the bearer token between invocations. The browser client keeps
//! its token in localStorage; the CLI equivalent is a JSON credentials file
//! under the user's home directory, created with owner-only permissions.
//!
//! `TASKDECK_TOKEN` overrides the stored token entirely, and
//! `TASKDECK_TOKEN_PATH` relocates the credentials file.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Stored credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub token: String,
    pub user_id: Option<Uuid>,
}

/// Get the credentials file path.
fn credentials_path() -> PathBuf {
    if let Ok(path) = std::env::var("TASKDECK_TOKEN_PATH") {
        PathBuf::from(path)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".taskdeck")
            .join("credentials")
    }
}

/// Load credentials, if any.
///
/// `TASKDECK_TOKEN` takes precedence over the file. Returns `None` when
/// neither source yields a token; the client then runs unauthenticated.
pub fn load_credentials() -> Option<Credentials> {
    if let Ok(token) = std::env::var("TASKDECK_TOKEN") {
        return Some(Credentials {
            token,
            user_id: None,
        });
    }

    let path = credentials_path();
    if !path.exists() {
        return None;
    }

    let contents = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Save credentials to file with secure permissions.
pub fn save_credentials(creds: &Credentials) -> Result<(), AppError> {
    let path = credentials_path();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(creds)?;
    let mut file = fs::File::create(&path)?;
    file.write_all(contents.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

/// Delete the credentials file.
pub fn delete_credentials() -> Result<(), AppError> {
    let path = credentials_path();
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}
