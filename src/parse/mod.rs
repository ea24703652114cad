//! Parsing module for the Motifia dictionary core
//!
//! This module contains the parsing logic for converting a raw
//! motif string into an ordered sequence of note tokens.

pub mod motif;

// Re-export commonly used types
pub use motif::*;
