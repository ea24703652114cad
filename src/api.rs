//! WASM API for the motif notation core
//!
//! This module provides the JavaScript-facing surface the dictionary
//! pages call: parsing a motif into tokens, rendering it to SVG, and
//! the two advisory form validators. Everything here is a thin shim
//! over the pure core functions; serialization failures at the
//! boundary are reported back to JavaScript as error values.

use wasm_bindgen::prelude::*;

use crate::models::PartOfSpeech;
use crate::parse::parse_motif;
use crate::renderers::svg::{document_svg, render_motif, StaffDrawing};
use crate::validate::{alphabet_violation, first_note_violation};

/// Render a motif string to a complete SVG document.
///
/// Total: invalid characters are dropped and an empty motif yields an
/// empty staff, so this never throws.
#[wasm_bindgen(js_name = renderMotif)]
pub fn render_motif_svg(motif: &str) -> String {
    log::debug!("renderMotif called for {:?}", motif);
    render_motif(motif)
}

/// Parse a motif string into its note tokens.
///
/// # Returns
/// JavaScript array of token objects (`letter`, `sharp`, `octave_shift`)
#[wasm_bindgen(js_name = parseMotif)]
pub fn parse_motif_js(motif: &str) -> Result<js_sys::Array, JsValue> {
    let tokens = parse_motif(motif);
    let token_text: Vec<String> = tokens.iter().map(|t| t.notation()).collect();
    log::debug!("parseMotif: {:?} -> [{}]", motif, token_text.join(" "));

    let array = js_sys::Array::new();
    for token in &tokens {
        let token_js = serde_wasm_bindgen::to_value(token)
            .map_err(|e| JsValue::from_str(&format!("Token serialization error: {}", e)))?;
        array.push(&token_js);
    }
    Ok(array)
}

/// Compute the staff drawing description for a motif without emitting
/// markup, for callers that want the position/stem metadata directly.
#[wasm_bindgen(js_name = motifDrawing)]
pub fn motif_drawing(motif: &str) -> Result<JsValue, JsValue> {
    let drawing = StaffDrawing::layout(&parse_motif(motif));
    serde_wasm_bindgen::to_value(&drawing)
        .map_err(|e| JsValue::from_str(&format!("Drawing serialization error: {}", e)))
}

/// Emit SVG for an already-computed drawing, for callers that adjust
/// the drawing description before emission.
#[wasm_bindgen(js_name = drawingToSvg)]
pub fn drawing_to_svg(drawing_js: JsValue) -> Result<String, JsValue> {
    let drawing: StaffDrawing = serde_wasm_bindgen::from_value(drawing_js)
        .map_err(|e| JsValue::from_str(&format!("Drawing deserialization error: {}", e)))?;
    Ok(document_svg(&drawing))
}

/// Alphabet check for the submission form. Returns the warning
/// message when the motif strays outside `A-G a-g # * "` and space,
/// or `undefined` when it is well-formed.
#[wasm_bindgen(js_name = motifAlphabetError)]
pub fn motif_alphabet_error(motif: &str) -> Option<String> {
    alphabet_violation(motif)
}

/// First-note rule check for the submission form. The part of speech
/// arrives in its wire form (`"noun"`, `"verb"`, ...); unknown values
/// produce no violation, mirroring the form before a part of speech
/// has been chosen.
#[wasm_bindgen(js_name = firstNoteRuleError)]
pub fn first_note_rule_error(motif: &str, part_of_speech: &str) -> Option<String> {
    let part = PartOfSpeech::parse(part_of_speech)?;
    first_note_violation(motif, part)
}
