//! Word store boundary
//!
//! The dictionary's CRUD surface, expressed as a trait so the real
//! backing store stays an external collaborator. Validation that the
//! wire layer used to leave implicit (blank words, duplicate keys)
//! happens here at the store boundary.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{NewWord, WordRecord, WordStatus, WordUpdate};

/// Errors surfaced by word store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Word is required")]
    EmptyWord,

    #[error("This word already exists")]
    DuplicateWord(String),

    #[error("Word not found")]
    WordNotFound(u64),
}

/// CRUD contract over the dictionary's backing table.
///
/// Words are keyed case-insensitively; `create` starts every record
/// in the moderation queue.
pub trait WordStore {
    /// All records, ordered by word ascending.
    fn list(&self) -> Vec<WordRecord>;

    /// Case-insensitive lookup by word text.
    fn get_by_key(&self, word: &str) -> Option<WordRecord>;

    /// First record carrying exactly this motif string. Used by the
    /// submission form's duplicate-motif advisory check.
    fn get_by_motif(&self, motif: &str) -> Option<WordRecord>;

    fn create(&mut self, new_word: NewWord) -> Result<WordRecord, StoreError>;

    fn update(&mut self, id: u64, fields: WordUpdate) -> Result<WordRecord, StoreError>;

    fn delete(&mut self, id: u64) -> Result<(), StoreError>;
}

/// In-memory reference implementation, keyed by the lowercase word.
#[derive(Debug, Default)]
pub struct MemoryWordStore {
    records: HashMap<u64, WordRecord>,
    next_id: u64,
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key_taken(&self, word: &str, except_id: Option<u64>) -> bool {
        let needle = word.to_lowercase();
        self.records
            .values()
            .any(|r| r.word == needle && Some(r.id) != except_id)
    }
}

impl WordStore for MemoryWordStore {
    fn list(&self) -> Vec<WordRecord> {
        let mut all: Vec<WordRecord> = self.records.values().cloned().collect();
        all.sort_by(|a, b| a.word.cmp(&b.word));
        all
    }

    fn get_by_key(&self, word: &str) -> Option<WordRecord> {
        let needle = word.to_lowercase();
        self.records.values().find(|r| r.word == needle).cloned()
    }

    fn get_by_motif(&self, motif: &str) -> Option<WordRecord> {
        self.records
            .values()
            .find(|r| r.motif.as_deref() == Some(motif))
            .cloned()
    }

    fn create(&mut self, new_word: NewWord) -> Result<WordRecord, StoreError> {
        let word = new_word.word.trim().to_lowercase();
        if word.is_empty() {
            return Err(StoreError::EmptyWord);
        }
        if self.key_taken(&word, None) {
            return Err(StoreError::DuplicateWord(word));
        }

        self.next_id += 1;
        let record = WordRecord {
            id: self.next_id,
            word,
            part_of_speech: new_word.part_of_speech,
            motif: new_word.motif,
            mnemonic: new_word.mnemonic,
            status: WordStatus::Queued,
        };
        self.records.insert(record.id, record.clone());

        log::debug!("created word '{}' (id {})", record.word, record.id);
        Ok(record)
    }

    fn update(&mut self, id: u64, fields: WordUpdate) -> Result<WordRecord, StoreError> {
        let word = fields.word.trim().to_lowercase();
        if word.is_empty() {
            return Err(StoreError::EmptyWord);
        }
        if !self.records.contains_key(&id) {
            return Err(StoreError::WordNotFound(id));
        }
        if self.key_taken(&word, Some(id)) {
            return Err(StoreError::DuplicateWord(word));
        }

        let record = WordRecord {
            id,
            word,
            part_of_speech: fields.part_of_speech,
            motif: fields.motif,
            mnemonic: fields.mnemonic,
            // A cleared status drops the record back into the queue.
            status: fields.status.unwrap_or(WordStatus::Queued),
        };
        self.records.insert(id, record.clone());
        Ok(record)
    }

    fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::WordNotFound(id))
    }
}
