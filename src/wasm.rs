//! WASM bindings for texlabel
//!
//! This module provides JavaScript-accessible functions for editor
//! extensions. Positions cross the boundary as UTF-16 code unit offsets, the
//! unit JavaScript strings are indexed in.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::Serialize;

#[cfg(feature = "wasm")]
use crate::core::label::buffer::{byte_to_utf16_offset, utf16_to_byte_offset};
#[cfg(feature = "wasm")]
use crate::core::label::{Edit, LabelOptions, Selection};

/// Edit with UTF-16 offsets (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize)]
pub struct JsEdit {
    pub start: usize,
    pub end: usize,
    /// `snippet` or `text`
    pub kind: &'static str,
    /// Snippet template or plain text, ready for the editor API
    pub contents: String,
    pub label_type: String,
    pub label_content: String,
}

#[cfg(feature = "wasm")]
impl JsEdit {
    fn from_edit(text: &str, edit: Edit) -> Self {
        let (kind, contents) = match &edit.insertion {
            crate::Insertion::Snippet(snippet) => ("snippet", snippet.to_template()),
            crate::Insertion::Text(plain) => ("text", plain.clone()),
        };
        Self {
            start: byte_to_utf16_offset(text, edit.range.start),
            end: byte_to_utf16_offset(text, edit.range.end),
            kind,
            contents,
            label_type: edit.label.label_type,
            label_content: edit.label.label_content,
        }
    }
}

/// Planning result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize)]
pub struct PlanResult {
    /// Edits to apply, one per cursor
    pub edits: Vec<JsEdit>,
    /// Whether planning succeeded
    pub success: bool,
    /// Error message if planning failed
    pub error: Option<String>,
}

/// Safely serialize a value to JsValue, returning an error object on failure.
#[cfg(feature = "wasm")]
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        let error_obj = PlanResult {
            edits: vec![],
            success: false,
            error: Some(format!("Serialization error: {}", e)),
        };
        serde_wasm_bindgen::to_value(&error_obj).unwrap_or(JsValue::NULL)
    })
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Slugify free text into a label identifier
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "slugify")]
pub fn slugify_wasm(input: &str) -> String {
    crate::slugify(input)
}

/// Compose the label for one cursor
///
/// # Arguments
/// * `text` - Full document
/// * `position` - Cursor as a UTF-16 offset
///
/// # Returns
/// `{label_type, label_content, before_text, after_text}`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "composeLabel")]
pub fn compose_label_wasm(text: &str, position: usize) -> JsValue {
    let pos = utf16_to_byte_offset(text, position);
    to_js_value(&crate::compose(text, pos))
}

/// Plan label insertions for all cursors
///
/// # Arguments
/// * `text` - Full document
/// * `positions` - Cursors as UTF-16 offsets
/// * `options` - Partial `LabelOptions` object; missing fields use defaults
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "planLabelInsertions")]
pub fn plan_label_insertions_wasm(text: &str, positions: Vec<u32>, options: JsValue) -> JsValue {
    let opts: LabelOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let selections: Vec<Selection> = positions
        .into_iter()
        .map(|p| Selection::point(utf16_to_byte_offset(text, p as usize)))
        .collect();

    let result = match crate::plan_insertions(text, &selections, &opts) {
        Ok(edits) => PlanResult {
            edits: edits
                .into_iter()
                .map(|edit| JsEdit::from_edit(text, edit))
                .collect(),
            success: true,
            error: None,
        },
        Err(e) => PlanResult {
            edits: vec![],
            success: false,
            error: Some(e.to_string()),
        },
    };
    to_js_value(&result)
}
