//! Caller-side checks performed before anything is dispatched.
//!
//! The container accepts every action; these helpers hold the write, login,
//! and signup screens' field rules so they can be exercised without a UI.

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use thiserror::Error;

use crate::models::{Credentials, JournalEntry, SignupProfile};
use crate::state::Action;
use crate::util::is_blank;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please write something before saving.")]
    EmptyContent,
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Text typed on the write screen, optionally editing an existing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    content: String,
    editing: Option<JournalEntry>,
}

impl EntryDraft {
    /// A draft for a brand-new entry
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            editing: None,
        }
    }

    /// A draft that will replace `entry` when saved
    pub fn editing(entry: JournalEntry, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            editing: Some(entry),
        }
    }

    pub const fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    /// Build the save action using the current local time
    pub fn compose(self) -> Result<Action, FormError> {
        self.compose_at(&Local::now())
    }

    /// Build the save action as if saved at `now`
    ///
    /// Edits keep the entry's id, display date, and time; only `content` and
    /// the canonical `date` change.
    pub fn compose_at<Tz>(self, now: &DateTime<Tz>) -> Result<Action, FormError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if is_blank(&self.content) {
            return Err(FormError::EmptyContent);
        }

        match self.editing {
            Some(existing) => Ok(Action::UpdateEntry(JournalEntry {
                content: self.content,
                date: now.with_timezone(&Utc),
                ..existing
            })),
            None => Ok(Action::AddEntry(JournalEntry::written_at(self.content, now))),
        }
    }
}

/// Login screen fields
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl LoginForm {
    pub fn validate(self) -> Result<Credentials, FormError> {
        if is_blank(&self.email) || is_blank(&self.password) {
            return Err(FormError::MissingFields);
        }
        Ok(Credentials::new(self.email.trim(), self.password))
    }
}

/// Signup screen fields
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SignupForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

impl SignupForm {
    pub fn validate(self) -> Result<SignupProfile, FormError> {
        let fields = [
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ];
        if fields.iter().any(|field| is_blank(field)) {
            return Err(FormError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(SignupProfile::new(self.name.trim(), self.email.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use pretty_assertions::assert_eq;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    #[test]
    fn blank_draft_is_rejected() {
        let error = EntryDraft::new("  \n ").compose().unwrap_err();
        assert_eq!(error, FormError::EmptyContent);
    }

    #[test]
    fn new_draft_becomes_add_entry() {
        let action = EntryDraft::new("Dear diary")
            .compose_at(&at("2025-11-26T12:45:00+00:00"))
            .unwrap();

        let Action::AddEntry(entry) = action else {
            panic!("expected AddEntry");
        };
        assert_eq!(entry.content, "Dear diary");
        assert_eq!(entry.display_date, "Wednesday, November 26, 2025");
        assert_eq!(entry.time, "12:45 PM");
    }

    #[test]
    fn edit_keeps_identity_and_display_fields() {
        let original = JournalEntry::written_at("v1", &at("2025-11-26T12:45:00+00:00"));
        let saved_at = at("2025-12-01T08:00:00+00:00");

        let action = EntryDraft::editing(original.clone(), "v2")
            .compose_at(&saved_at)
            .unwrap();

        let Action::UpdateEntry(entry) = action else {
            panic!("expected UpdateEntry");
        };
        assert_eq!(entry.id, original.id);
        assert_eq!(entry.content, "v2");
        assert_eq!(entry.display_date, original.display_date);
        assert_eq!(entry.time, original.time);
        assert_eq!(entry.date, saved_at.with_timezone(&Utc));
    }

    #[test]
    fn login_requires_both_fields() {
        let form = LoginForm {
            email: "a@b.com".to_string(),
            password: String::new(),
        };
        assert_eq!(form.validate().unwrap_err(), FormError::MissingFields);

        let credentials = LoginForm {
            email: " a@b.com ".to_string(),
            password: "x".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(credentials.email, "a@b.com");
    }

    #[test]
    fn signup_checks_presence_before_match() {
        let form = SignupForm {
            name: "Ada".to_string(),
            email: String::new(),
            password: "a".to_string(),
            confirm_password: "b".to_string(),
        };
        assert_eq!(form.validate().unwrap_err(), FormError::MissingFields);
    }

    #[test]
    fn signup_rejects_mismatched_passwords() {
        let form = SignupForm {
            name: "Ada".to_string(),
            email: "ada@b.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "Secret".to_string(),
        };
        assert_eq!(form.validate().unwrap_err(), FormError::PasswordMismatch);
    }

    #[test]
    fn signup_yields_profile() {
        let profile = SignupForm {
            name: " Ada ".to_string(),
            email: "ada@b.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(profile, SignupProfile::new("Ada", "ada@b.com"));
    }

    #[test]
    fn form_debug_hides_passwords() {
        let form = SignupForm {
            password: "hunter2".to_string(),
            confirm_password: "hunter2".to_string(),
            ..SignupForm::default()
        };
        assert!(!format!("{form:?}").contains("hunter2"));
    }
}
