//! Auth slice: a local session stub with no credential check

use serde::{Deserialize, Serialize};

use super::Dispatched;
use crate::models::{Credentials, SignupProfile, User};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthState {
    pub fn login(&mut self, credentials: Credentials) -> Dispatched {
        self.user = Some(User::from(credentials));
        Dispatched::Applied
    }

    pub fn signup(&mut self, profile: SignupProfile) -> Dispatched {
        self.user = Some(User::from(profile));
        Dispatched::Applied
    }

    pub fn logout(&mut self) -> Dispatched {
        self.user = None;
        Dispatched::Applied
    }

    pub const fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
