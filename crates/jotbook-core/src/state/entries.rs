//! Entry slice: the ordered journal, newest first

use serde::{Deserialize, Serialize};

use super::Dispatched;
use crate::models::{EntryId, JournalEntry};

/// Journal entries in explicit list order (index 0 is the newest)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntriesState {
    entries: Vec<JournalEntry>,
}

impl EntriesState {
    pub const fn new(entries: Vec<JournalEntry>) -> Self {
        Self { entries }
    }

    /// Insert at the front of the list. Never fails.
    pub fn add(&mut self, entry: JournalEntry) -> Dispatched {
        self.entries.insert(0, entry);
        Dispatched::Applied
    }

    /// Replace the entry with the same id, keeping its position.
    pub fn update(&mut self, entry: JournalEntry) -> Dispatched {
        match self.entries.iter_mut().find(|existing| existing.id == entry.id) {
            Some(slot) => {
                *slot = entry;
                Dispatched::Applied
            }
            None => Dispatched::NotFound,
        }
    }

    /// Remove every entry matching `id`.
    pub fn delete(&mut self, id: &EntryId) -> Dispatched {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.id != id);
        if self.entries.len() < before {
            Dispatched::Applied
        } else {
            Dispatched::NotFound
        }
    }

    pub fn get(&self, id: &EntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn position(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JournalEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EntriesState {
    type Item = &'a JournalEntry;
    type IntoIter = std::slice::Iter<'a, JournalEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
