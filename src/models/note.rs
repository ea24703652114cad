//! Note token types for the motif micro-language
//!
//! A motif string parses into an ordered sequence of [`NoteToken`]s.
//! Tokens are transient: they exist between parsing and rendering and
//! are never persisted (only the raw motif string is stored on a word).

use serde::{Deserialize, Serialize};

/// The seven base note letters accepted by the motif grammar.
///
/// Input is case-insensitive; tokens always carry the uppercase form.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl NoteLetter {
    /// Map a character to a note letter, accepting both cases.
    /// Returns `None` for anything outside A-G.
    pub fn from_char(c: char) -> Option<NoteLetter> {
        match c.to_ascii_uppercase() {
            'A' => Some(NoteLetter::A),
            'B' => Some(NoteLetter::B),
            'C' => Some(NoteLetter::C),
            'D' => Some(NoteLetter::D),
            'E' => Some(NoteLetter::E),
            'F' => Some(NoteLetter::F),
            'G' => Some(NoteLetter::G),
            _ => None,
        }
    }

    /// The uppercase character form of this letter.
    pub fn as_char(&self) -> char {
        match self {
            NoteLetter::A => 'A',
            NoteLetter::B => 'B',
            NoteLetter::C => 'C',
            NoteLetter::D => 'D',
            NoteLetter::E => 'E',
            NoteLetter::F => 'F',
            NoteLetter::G => 'G',
        }
    }
}

/// One parsed musical unit of a motif.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteToken {
    /// Base letter (A-G, normalized to uppercase)
    pub letter: NoteLetter,

    /// Whether a sharp modifier (`#`) was attached
    pub sharp: bool,

    /// Net octave shift: count of `*` markers minus count of `"` markers
    pub octave_shift: i32,
}

impl NoteToken {
    /// Create a plain token for a letter, with no modifiers yet.
    pub fn new(letter: NoteLetter) -> Self {
        Self {
            letter,
            sharp: false,
            octave_shift: 0,
        }
    }

    /// Reconstruct the notation text for this token (e.g. `C#*`).
    pub fn notation(&self) -> String {
        let mut out = String::new();
        out.push(self.letter.as_char());
        if self.sharp {
            out.push('#');
        }
        for _ in 0..self.octave_shift.max(0) {
            out.push('*');
        }
        for _ in 0..(-self.octave_shift).max(0) {
            out.push('"');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_parsing_is_case_insensitive() {
        assert_eq!(NoteLetter::from_char('c'), Some(NoteLetter::C));
        assert_eq!(NoteLetter::from_char('C'), Some(NoteLetter::C));
        assert_eq!(NoteLetter::from_char('g'), Some(NoteLetter::G));
        assert_eq!(NoteLetter::from_char('h'), None);
        assert_eq!(NoteLetter::from_char('#'), None);
    }

    #[test]
    fn notation_round_trips_modifiers() {
        let mut token = NoteToken::new(NoteLetter::D);
        token.sharp = true;
        token.octave_shift = 2;
        assert_eq!(token.notation(), "D#**");

        token.octave_shift = -1;
        assert_eq!(token.notation(), "D#\"");
    }
}
