//! Advisory motif validators used by the submission form
//!
//! These checks produce warning messages that block submission in the
//! UI; they are not errors raised by the parser or renderer, which are
//! total functions. Two checks exist and they deliberately stay
//! distinct:
//!
//! - the alphabet check is a whole-string character-class test, looser
//!   than the tokenizer (a bare leading `#` passes it but produces no
//!   token);
//! - the first-note rule inspects the first non-space character of the
//!   motif, uppercased, against the part-of-speech letter table.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::PartOfSpeech;

/// Warning shown when a motif contains characters outside the grammar.
pub const ALPHABET_WARNING: &str = "Only use letters A-G, #, *, and \" for notation";

static MOTIF_ALPHABET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[A-Ga-g#*" ]*$"#).expect("motif alphabet pattern"));

/// Check that every character of a motif belongs to the accepted
/// alphabet. Returns the warning message on violation, `None` if the
/// string is well-formed (the empty string is well-formed).
pub fn alphabet_violation(motif: &str) -> Option<String> {
    if MOTIF_ALPHABET.is_match(motif) {
        None
    } else {
        Some(ALPHABET_WARNING.to_string())
    }
}

/// Check the per-part-of-speech first-note convention: noun and
/// pronoun motifs start on C, verbs on D, adjectives and adverbs on A,
/// prepositions on E, conjunctions on G.
///
/// An empty (or all-space) motif passes; the rule only applies once
/// there is something to play. Returns a message naming the part of
/// speech and the required letter, e.g. `Nouns must start with C`.
pub fn first_note_violation(motif: &str, part_of_speech: PartOfSpeech) -> Option<String> {
    let first = motif.trim().chars().next()?;
    let required = part_of_speech.required_first_letter();

    if first.to_ascii_uppercase() == required.as_char() {
        None
    } else {
        Some(format!(
            "{}s must start with {}",
            part_of_speech.display_name(),
            required.as_char()
        ))
    }
}
