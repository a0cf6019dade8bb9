//! Composing the full label and the text around it

use log::trace;
use serde::Serialize;

use super::buffer::TextBuffer;
use super::locate::{locate_with, LabelContext};
use super::options::LabelOptions;
use super::snippet::Snippet;

const LABEL_COMMAND: &str = "\\label";

/// A label ready to be inserted at one cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelResult {
    pub label_type: String,
    pub label_content: String,
    /// Text inserted before `type:content` (`\label{`, `{` or nothing)
    pub before_text: String,
    /// Text inserted after `type:content` (`}` or nothing)
    pub after_text: String,
}

impl LabelResult {
    /// The label as flat text: `{before}{type}:{content}{after}`.
    pub fn render(&self) -> String {
        format!(
            "{}{}:{}{}",
            self.before_text, self.label_type, self.label_content, self.after_text
        )
    }

    /// The label as a tab-stop snippet with the type and content editable.
    pub fn snippet(&self) -> Snippet {
        Snippet::new()
            .text(&self.before_text)
            .tab_stop(1, &self.label_type)
            .text(":")
            .tab_stop(2, &self.label_content)
            .text(&self.after_text)
            .final_stop()
    }
}

/// Compose the label for `pos` with default options.
pub fn compose<B: TextBuffer + ?Sized>(buffer: &B, pos: usize) -> LabelResult {
    compose_with(buffer, pos, &LabelOptions::default())
}

/// Compose the label for `pos`.
pub fn compose_with<B: TextBuffer + ?Sized>(
    buffer: &B,
    pos: usize,
    options: &LabelOptions,
) -> LabelResult {
    let pos = buffer.clamp_position(pos);
    let LabelContext {
        label_type,
        label_content,
    } = locate_with(buffer, pos, options);
    let line_start = buffer.line_range(pos).start;
    let (before_text, after_text) = label_affixes(&buffer.substr(line_start..pos));

    LabelResult {
        label_type,
        label_content,
        before_text: before_text.to_string(),
        after_text: after_text.to_string(),
    }
}

/// Affixes needed given the line text before the cursor.
///
/// A `\label{` right before the cursor needs nothing, a bare `\label` needs
/// the braces, anything else needs the whole command.
pub fn label_affixes(line_before: &str) -> (&'static str, &'static str) {
    let affixes = match line_before.strip_suffix('{') {
        Some(rest) if rest.ends_with(LABEL_COMMAND) => ("", ""),
        _ if line_before.ends_with(LABEL_COMMAND) => ("{", "}"),
        _ => ("\\label{", "}"),
    };
    trace!("affixes {:?} after {:?}", affixes, line_before);
    affixes
}
