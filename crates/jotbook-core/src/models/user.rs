//! Signed-in user and the payloads that create one

use std::fmt;

use serde::{Deserialize, Serialize};

/// The locally signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Login payload. The password is accepted but never checked or stored.
#[derive(Clone, PartialEq, Eq)]
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

impl fmt::Debug for Credentials {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Signup payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupProfile {
    pub name: String,
    pub email: String,
}

impl SignupProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl From<Credentials> for User {
    fn from(credentials: Credentials) -> Self {
        Self {
            email: credentials.email,
            name: None,
        }
    }
}

impl From<SignupProfile> for User {
    fn from(profile: SignupProfile) -> Self {
        Self {
            email: profile.email,
            name: Some(profile.name),
        }
    }
}
