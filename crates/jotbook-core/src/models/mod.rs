//! Data models for Jotbook

mod entry;
mod theme;
mod user;

pub use entry::{format_display_date, format_display_time, EntryId, JournalEntry};
pub use theme::{ColorScheme, ThemeMode};
pub use user::{Credentials, SignupProfile, User};
