use serde::{Deserialize, Serialize};

/// Represents a registered account.
///
/// Every product and pricing profile belongs to a user, and ownership is
/// enforced by threading an explicit user id through each call; there is no
/// process-wide "current user".
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
    pub name: String,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Notes
    /// The `id` field is initialized as an empty string and will be set by the actor system.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            email: email.into(),
            name: name.into(),
        }
    }
}
