//! Utility modules for the Motifia dictionary core
//!
//! This module contains helpers shared by the form-facing validation
//! flow.

pub mod sequencer;

// Re-export commonly used types
pub use sequencer::{ValidationSequencer, ValidationTicket};
