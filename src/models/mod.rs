//! Models module for the Motifia dictionary core
//!
//! This module contains the data models exchanged between the motif
//! parser/renderer and the word store and auth boundaries.

pub mod note;
pub mod profile;
pub mod word;

// Re-export commonly used types
pub use note::{NoteLetter, NoteToken};
pub use profile::UserProfile;
pub use word::{NewWord, PartOfSpeech, WordRecord, WordStatus, WordUpdate};
