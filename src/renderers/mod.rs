//! Renderers module for the Motifia dictionary core
//!
//! This module contains rendering logic for converting parsed motif
//! notation into drawing output.

pub mod svg;

// Re-export commonly used types
pub use svg::{
    canvas_width, document_svg, render_motif, staff_y, ClefGlyph, NoteGlyph, SharpGlyph,
    StaffDrawing, StaffLine, StemDirection,
};
