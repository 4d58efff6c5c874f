use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role. Decides which console a login lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Officer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Officer => "officer",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "officer" => Some(Role::Officer),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile persisted under the `user_info` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub role: Role,
}

/// Token + profile, read on every guarded command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl Session {
    pub fn username(&self) -> &str {
        &self.user.username
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionCheck<'a> {
    pub token: &'a str,
    pub username: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordUpdate<'a> {
    pub username: &'a str,
    pub token: &'a str,
    pub current_password: &'a str,
    pub new_password: &'a str,
}

/// Generic `{ "message": ... }` body returned by most mutating endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: String,
}
