//! Motifia Dictionary WASM Module
//!
//! Core logic for the Motifia invented-word dictionary: the motif
//! notation micro-language (tokenizer, advisory validators, staff SVG
//! renderer) plus the typed boundary shapes the CRUD and auth layers
//! consume.

pub mod api;
pub mod auth;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod store;
pub mod utils;
pub mod validate;

// Re-export commonly used types
pub use models::note::{NoteLetter, NoteToken};
pub use models::word::{NewWord, PartOfSpeech, WordRecord, WordStatus, WordUpdate};
pub use parse::parse_motif;
pub use renderers::svg::{render_motif, StaffDrawing};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Motifia dictionary WASM module initialized");
}
