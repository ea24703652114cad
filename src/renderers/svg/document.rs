//! Staff drawing layout
//!
//! Takes a parsed note-token sequence and computes the complete
//! drawing description: canvas size, staff lines, clef, and one glyph
//! per note with its stem and optional sharp. The numbers here are a
//! fixed visual calibration for the five-line staff, not a formula;
//! the letter table in particular must stay exactly as given.

use serde::{Deserialize, Serialize};

use crate::models::NoteToken;

/// Canvas height, constant regardless of note count.
pub const CANVAS_HEIGHT: i32 = 100;

/// Minimum canvas width; short motifs never shrink below this.
pub const MIN_WIDTH: i32 = 300;

/// Horizontal space reserved left of the first note slot (clef area).
pub const LEFT_MARGIN: i32 = 100;

/// Horizontal space reserved right of the last note slot.
pub const RIGHT_MARGIN: i32 = 50;

/// Width of one note slot; notes are laid out at this pitch.
pub const NOTE_SLOT_WIDTH: i32 = 50;

/// The five staff line y-coordinates, top to bottom.
pub const STAFF_LINE_YS: [i32; 5] = [30, 40, 50, 60, 70];

/// Inset of the staff lines from the canvas edges.
pub const STAFF_INSET: i32 = 10;

/// Vertical distance of one octave shift.
pub const OCTAVE_STEP: i32 = 35;

/// Fallback position (middle C) for anything without a table entry.
pub const MIDDLE_POSITION: i32 = 60;

/// Notes at or above this y get a downward stem; below it, upward.
pub const STEM_THRESHOLD: i32 = 50;

/// Stem length in canvas units.
pub const STEM_LENGTH: i32 = 37;

/// Horizontal distance from the notehead center to its stem.
pub const STEM_INSET: i32 = 7;

/// Sharp glyph box offset from its notehead (left of, aligned with).
pub const SHARP_OFFSET_X: i32 = -38;
pub const SHARP_OFFSET_Y: i32 = -20;

/// Sharp glyph box size.
pub const SHARP_SIZE: i32 = 40;

/// Base staff position for a note letter.
///
/// These seven offsets calibrate the staff drawing (C sits on the
/// middle position, successive letters step by 5 units up the staff).
/// Any character outside the table falls back to the middle position;
/// rendering is best-effort and never fails.
pub fn staff_y(letter: char) -> i32 {
    match letter.to_ascii_uppercase() {
        'C' => 60,
        'D' => 55,
        'E' => 50,
        'F' => 45,
        'G' => 40,
        'A' => 35,
        'B' => 30,
        _ => MIDDLE_POSITION,
    }
}

/// Canvas width for a drawing with `note_count` notes.
pub fn canvas_width(note_count: usize) -> i32 {
    let laid_out = LEFT_MARGIN + NOTE_SLOT_WIDTH * note_count as i32 + RIGHT_MARGIN;
    laid_out.max(MIN_WIDTH)
}

/// Which way a note's stem extends, and on which side it is drawn.
/// Side and direction flip together at the staff midline.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StemDirection {
    /// Stem on the left of the notehead, extending upward
    Up,
    /// Stem on the right of the notehead, extending downward
    Down,
}

/// One horizontal staff line.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaffLine {
    pub y: i32,
    pub x1: i32,
    pub x2: i32,
}

/// The treble clef at the left end of the staff.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClefGlyph {
    pub x: i32,
    pub y: i32,
}

impl Default for ClefGlyph {
    fn default() -> Self {
        // Tucked against the staff inset, baseline below the bottom line.
        Self { x: 12, y: 72 }
    }
}

/// A sharp sign drawn immediately left of its note.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SharpGlyph {
    /// Top-left of the glyph box
    pub x: i32,
    pub y: i32,
}

/// One rendered note: head position, stem, optional sharp.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteGlyph {
    /// Notehead center x
    pub x: i32,

    /// Notehead center y (vertical staff position)
    pub y: i32,

    pub stem: StemDirection,

    pub sharp: Option<SharpGlyph>,
}

impl NoteGlyph {
    /// x-coordinate of the stem line for this note.
    pub fn stem_x(&self) -> i32 {
        match self.stem {
            StemDirection::Up => self.x - STEM_INSET,
            StemDirection::Down => self.x + STEM_INSET,
        }
    }

    /// y-coordinate of the far end of the stem.
    pub fn stem_tip_y(&self) -> i32 {
        match self.stem {
            StemDirection::Up => self.y - STEM_LENGTH,
            StemDirection::Down => self.y + STEM_LENGTH,
        }
    }
}

/// Complete drawing description for a motif: fixed height, width
/// proportional to note count, staff lines, clef, and note glyphs in
/// parse order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StaffDrawing {
    pub width: i32,
    pub height: i32,
    pub staff_lines: Vec<StaffLine>,
    pub clef: ClefGlyph,
    pub notes: Vec<NoteGlyph>,
}

impl StaffDrawing {
    /// Lay out a token sequence onto the staff.
    pub fn layout(tokens: &[NoteToken]) -> StaffDrawing {
        let width = canvas_width(tokens.len());

        let staff_lines = STAFF_LINE_YS
            .iter()
            .map(|&y| StaffLine {
                y,
                x1: STAFF_INSET,
                x2: width - STAFF_INSET,
            })
            .collect();

        let notes = tokens
            .iter()
            .enumerate()
            .map(|(slot, token)| Self::place_note(slot, token))
            .collect();

        StaffDrawing {
            width,
            height: CANVAS_HEIGHT,
            staff_lines,
            clef: ClefGlyph::default(),
            notes,
        }
    }

    fn place_note(slot: usize, token: &NoteToken) -> NoteGlyph {
        let x = LEFT_MARGIN + NOTE_SLOT_WIDTH * slot as i32;

        // Octave markers move the head by a full octave step each,
        // independent of the letter-to-letter spacing.
        let y = staff_y(token.letter.as_char()) - OCTAVE_STEP * token.octave_shift;

        let stem = if y <= STEM_THRESHOLD {
            StemDirection::Down
        } else {
            StemDirection::Up
        };

        let sharp = token.sharp.then(|| SharpGlyph {
            x: x + SHARP_OFFSET_X,
            y: y + SHARP_OFFSET_Y,
        });

        NoteGlyph { x, y, stem, sharp }
    }
}
