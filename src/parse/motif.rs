//! Motif string tokenizer
//!
//! Scans a raw motif string into note tokens. The scan is anchored on
//! letters: a token opens at each A-G (either case) and absorbs the
//! modifier characters that follow it (`#` sharp, `*` octave up,
//! `"` octave down) until the next letter or end of input. Every other
//! character is dropped without complaint, so the tokenizer is total:
//! it cannot fail, and an all-noise input simply yields no tokens.

use crate::models::{NoteLetter, NoteToken};

/// Parse a motif string into its ordered note tokens.
///
/// Pure and restartable: the same input always produces the same
/// sequence, and there is no state carried between calls.
///
/// Modifier handling mirrors the submission form's looser alphabet
/// check in one deliberate way: a modifier that appears before any
/// letter has no open token to attach to and is discarded, even
/// though the alphabet validator would have accepted the string.
pub fn parse_motif(input: &str) -> Vec<NoteToken> {
    let mut tokens = Vec::new();
    let mut current: Option<NoteToken> = None;

    for c in input.chars() {
        if let Some(letter) = NoteLetter::from_char(c) {
            // A letter closes the open token and starts a new one.
            if let Some(done) = current.take() {
                tokens.push(done);
            }
            current = Some(NoteToken::new(letter));
            continue;
        }

        match c {
            '#' => {
                if let Some(token) = current.as_mut() {
                    token.sharp = true;
                }
            }
            '*' => {
                if let Some(token) = current.as_mut() {
                    token.octave_shift += 1;
                }
            }
            '"' => {
                if let Some(token) = current.as_mut() {
                    token.octave_shift -= 1;
                }
            }
            // Anything else (spaces included) is dropped.
            _ => {}
        }
    }

    // Trailing modifiers stay attached to the last open token.
    if let Some(done) = current {
        tokens.push(done);
    }

    tokens
}
