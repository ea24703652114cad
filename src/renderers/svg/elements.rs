//! SVG element emission
//!
//! Serializes a staff drawing into SVG markup. The geometry all comes
//! from the layout stage; this file only knows how to spell each glyph
//! as an element.

use std::fmt::Write;

use super::document::{NoteGlyph, StaffDrawing, StaffLine, SHARP_SIZE};

/// Notehead ellipse radii and tilt.
const NOTEHEAD_RX: i32 = 8;
const NOTEHEAD_RY: i32 = 6;
const NOTEHEAD_TILT: i32 = -20;

/// The stem starts slightly above the notehead center.
const STEM_ATTACH_OFFSET: i32 = -2;

/// Unicode glyphs for the clef and the sharp sign.
const TREBLE_CLEF: char = '\u{1D11E}';
const SHARP_SIGN: char = '\u{266F}';

/// Emit one staff line.
pub fn staff_line_svg(line: &StaffLine) -> String {
    format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="1"/>"#,
        line.x1, line.y, line.x2, line.y
    )
}

/// Emit the treble clef, slightly rotated like the hand-tuned original
/// artwork.
pub fn clef_svg(drawing: &StaffDrawing) -> String {
    format!(
        r#"<text x="{}" y="{}" font-size="62" font-family="serif" transform="rotate(-10, 40, 50)">{}</text>"#,
        drawing.clef.x, drawing.clef.y, TREBLE_CLEF
    )
}

/// Emit a notehead with its stem, plus the sharp sign when present.
pub fn note_glyph_svg(note: &NoteGlyph) -> String {
    let mut out = String::new();

    if let Some(sharp) = note.sharp {
        // The glyph box is SHARP_SIZE square; the text baseline sits
        // near its vertical center so the sign aligns with the head.
        let baseline = sharp.y + SHARP_SIZE * 4 / 5;
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" font-size="{}" font-family="serif">{}</text>"#,
            sharp.x, baseline, SHARP_SIZE, SHARP_SIGN
        );
    }

    let _ = write!(
        out,
        r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" transform="rotate({}, {}, {})" fill="black"/>"#,
        note.x, note.y, NOTEHEAD_RX, NOTEHEAD_RY, NOTEHEAD_TILT, note.x, note.y
    );

    let stem_x = note.stem_x();
    let _ = write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="2"/>"#,
        stem_x,
        note.y + STEM_ATTACH_OFFSET,
        stem_x,
        note.stem_tip_y()
    );

    out
}

/// Emit the complete SVG document for a drawing.
pub fn document_svg(drawing: &StaffDrawing) -> String {
    let mut out = String::new();

    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = drawing.width,
        h = drawing.height
    );

    for line in &drawing.staff_lines {
        out.push_str(&staff_line_svg(line));
    }

    out.push_str(&clef_svg(drawing));

    for note in &drawing.notes {
        out.push_str(&note_glyph_svg(note));
    }

    out.push_str("</svg>");
    out
}
