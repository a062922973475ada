use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user as returned by the API.
///
/// The registration credential never appears here; fetched users are
/// re-serialized without it (see `auth::RegisterRequest` for the payload
/// that carries one).
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Display name used in board rendering and listings.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
