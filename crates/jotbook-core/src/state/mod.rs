//! Root state tree and its reducers
//!
//! Every user action maps to exactly one [`Action`]. [`RootState::reduce`]
//! applies it synchronously and reports whether anything matched, so callers
//! can tell a no-op caused by a stale id apart from a real change.

mod auth;
mod entries;
mod theme;

use std::fmt;

pub use auth::AuthState;
pub use entries::EntriesState;
pub use theme::ThemeState;

use crate::models::{Credentials, EntryId, JournalEntry, SignupProfile, ThemeMode};

/// Outcome of a dispatched action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Dispatched {
    /// The action changed (or overwrote) state
    Applied,
    /// Update/delete named an id that is not in the journal; state is unchanged
    NotFound,
}

impl Dispatched {
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Mutations the presentation layer can request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddEntry(JournalEntry),
    UpdateEntry(JournalEntry),
    DeleteEntry(EntryId),
    SetTheme(ThemeMode),
    Login(Credentials),
    Signup(SignupProfile),
    Logout,
}

impl Action {
    /// Short name for logs; payloads may carry private text
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddEntry(_) => "add_entry",
            Self::UpdateEntry(_) => "update_entry",
            Self::DeleteEntry(_) => "delete_entry",
            Self::SetTheme(_) => "set_theme",
            Self::Login(_) => "login",
            Self::Signup(_) => "signup",
            Self::Logout => "logout",
        }
    }

    /// The slice this action writes to
    pub const fn slice(&self) -> Slice {
        match self {
            Self::AddEntry(_) | Self::UpdateEntry(_) | Self::DeleteEntry(_) => Slice::Entries,
            Self::SetTheme(_) => Slice::Theme,
            Self::Login(_) | Self::Signup(_) | Self::Logout => Slice::Auth,
        }
    }
}

/// One of the three sub-states of [`RootState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slice {
    Entries,
    Theme,
    Auth,
}

impl Slice {
    pub const ALL: [Self; 3] = [Self::Entries, Self::Theme, Self::Auth];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entries => "entries",
            Self::Theme => "theme",
            Self::Auth => "auth",
        }
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The whole application state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootState {
    pub entries: EntriesState,
    pub theme: ThemeState,
    pub auth: AuthState,
}

impl RootState {
    /// Apply one action. Total: every action yields a state.
    pub fn reduce(&mut self, action: Action) -> Dispatched {
        match action {
            Action::AddEntry(entry) => self.entries.add(entry),
            Action::UpdateEntry(entry) => self.entries.update(entry),
            Action::DeleteEntry(id) => self.entries.delete(&id),
            Action::SetTheme(mode) => self.theme.set_theme(mode),
            Action::Login(credentials) => self.auth.login(credentials),
            Action::Signup(profile) => self.auth.signup(profile),
            Action::Logout => self.auth.logout(),
        }
    }
}
