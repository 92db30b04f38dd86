//! jotbook-core - Core library for Jotbook
//!
//! This crate contains the journal models, the root state container with its
//! reducers, and the durable persistence layer that a presentation shell
//! (mobile or desktop) drives through dispatched actions.

pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod logging;
pub mod models;
pub mod persist;
pub mod state;
pub mod store;
pub mod theme;
pub mod util;

pub use error::{Error, Result};
pub use models::{EntryId, JournalEntry, ThemeMode, User};
pub use state::{Action, Dispatched, RootState};
pub use store::Store;
