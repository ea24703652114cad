//! SVG rendering output
//!
//! This module provides SVG rendering output for motif notation:
//! a layout stage that produces a typed staff drawing, and an emitter
//! that serializes it to SVG markup.

pub mod document;
pub mod elements;

pub use document::*;
pub use elements::*;

use crate::parse::parse_motif;

/// Render a raw motif string straight to an SVG document.
///
/// Total like the stages it composes: noise characters are dropped by
/// the parser and an empty motif renders an empty staff.
pub fn render_motif(motif: &str) -> String {
    let tokens = parse_motif(motif);
    let drawing = StaffDrawing::layout(&tokens);
    document_svg(&drawing)
}
