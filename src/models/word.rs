//! Word record types exchanged with the dictionary store
//!
//! The backing store keys words case-insensitively by their text and
//! tracks a moderation status (`queued` until an admin accepts them).
//! These are explicit tagged shapes for what the wire layer passes
//! around as loose JSON; construction is validated at the store
//! boundary, not assumed.

use serde::{Deserialize, Serialize};

use super::note::NoteLetter;

/// Grammatical category of a dictionary word.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
}

impl PartOfSpeech {
    /// Parse the lowercase wire form (`"noun"`, `"verb"`, ...).
    pub fn parse(value: &str) -> Option<PartOfSpeech> {
        match value {
            "noun" => Some(PartOfSpeech::Noun),
            "verb" => Some(PartOfSpeech::Verb),
            "adjective" => Some(PartOfSpeech::Adjective),
            "adverb" => Some(PartOfSpeech::Adverb),
            "pronoun" => Some(PartOfSpeech::Pronoun),
            "preposition" => Some(PartOfSpeech::Preposition),
            "conjunction" => Some(PartOfSpeech::Conjunction),
            _ => None,
        }
    }

    /// Capitalized singular name, used in user-facing rule messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Verb => "Verb",
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::Adverb => "Adverb",
            PartOfSpeech::Pronoun => "Pronoun",
            PartOfSpeech::Preposition => "Preposition",
            PartOfSpeech::Conjunction => "Conjunction",
        }
    }

    /// The letter a motif for this part of speech must start with.
    ///
    /// Noun/pronoun motifs start on C, verbs on D, adjectives and
    /// adverbs on A, prepositions on E, conjunctions on G.
    pub fn required_first_letter(&self) -> NoteLetter {
        match self {
            PartOfSpeech::Noun | PartOfSpeech::Pronoun => NoteLetter::C,
            PartOfSpeech::Verb => NoteLetter::D,
            PartOfSpeech::Adjective | PartOfSpeech::Adverb => NoteLetter::A,
            PartOfSpeech::Preposition => NoteLetter::E,
            PartOfSpeech::Conjunction => NoteLetter::G,
        }
    }
}

/// Moderation state of a submitted word.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    /// Submitted, awaiting admin review
    Queued,
    /// Approved by the admin, visible in the dictionary
    Accepted,
}

impl Default for WordStatus {
    fn default() -> Self {
        WordStatus::Queued
    }
}

/// A stored dictionary entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WordRecord {
    /// Opaque store-assigned identifier
    pub id: u64,

    /// The word text, stored lowercase (unique case-insensitively)
    pub word: String,

    pub part_of_speech: Option<PartOfSpeech>,

    /// Raw motif notation string, if one was submitted
    pub motif: Option<String>,

    /// Free-text memory aid
    pub mnemonic: Option<String>,

    pub status: WordStatus,
}

/// Fields for a new submission. The store lowercases the word,
/// assigns the id, and starts the record in `Queued`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct NewWord {
    pub word: String,
    pub part_of_speech: Option<PartOfSpeech>,
    pub motif: Option<String>,
    pub mnemonic: Option<String>,
}

impl NewWord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }
}

/// Full replacement payload for an existing record. A missing status
/// falls back to `Queued`, matching the submission flow.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct WordUpdate {
    pub word: String,
    pub part_of_speech: Option<PartOfSpeech>,
    pub motif: Option<String>,
    pub mnemonic: Option<String>,
    pub status: Option<WordStatus>,
}
