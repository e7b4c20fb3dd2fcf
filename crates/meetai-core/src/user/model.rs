//! Authenticated session domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The signed-in user as reported by the auth backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl UserSession {
    /// Name shown in "Logged in as ..." and used as the avatar seed.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "guest"
        } else {
            &self.name
        }
    }
}

/// Third-party sign-in providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SocialProvider {
    Google,
    Github,
}

/// Email/password credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
