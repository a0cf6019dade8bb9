//! Options for label inference and insertion

use serde::{Deserialize, Serialize};

use crate::data::maps::{DEFAULT_LABEL_CONTENT, UNKNOWN_LABEL_TYPE};
use crate::utils::error::{LabelError, LabelErrorResult};

/// How a computed label is handed to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsertionStyle {
    /// Tab-stop snippet for a single cursor, plain text for several
    #[default]
    Auto,
    /// Always produce a snippet
    Snippet,
    /// Always produce plain text
    PlainText,
}

impl InsertionStyle {
    /// Whether a snippet should be produced for `cursor_count` cursors.
    pub fn uses_snippet(self, cursor_count: usize) -> bool {
        match self {
            InsertionStyle::Auto => cursor_count == 1,
            InsertionStyle::Snippet => true,
            InsertionStyle::PlainText => false,
        }
    }
}

/// Options for label inference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    /// Type tag used when no type can be inferred.
    /// Default: `???`
    pub placeholder_type: String,

    /// Content used when no labelled command precedes the cursor.
    /// Default: `label`
    pub placeholder_content: String,

    /// Use `placeholder_content` when the command argument slugifies to
    /// nothing but underscores (e.g. `\section{?}`).
    /// Default: false
    pub fill_empty_content: bool,

    /// Snippet or plain text insertion.
    /// Default: `Auto`
    pub style: InsertionStyle,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            placeholder_type: UNKNOWN_LABEL_TYPE.to_string(),
            placeholder_content: DEFAULT_LABEL_CONTENT.to_string(),
            fill_empty_content: false,
            style: InsertionStyle::Auto,
        }
    }
}

impl LabelOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options that never produce snippets
    pub fn plain_text() -> Self {
        Self {
            style: InsertionStyle::PlainText,
            ..Self::default()
        }
    }

    /// Placeholder type tag, falling back to `???` when left empty.
    pub fn placeholder_type(&self) -> &str {
        if self.placeholder_type.is_empty() {
            UNKNOWN_LABEL_TYPE
        } else {
            &self.placeholder_type
        }
    }

    /// Check that the placeholders can always be printed and edited.
    pub fn validate(&self) -> LabelErrorResult<()> {
        if self.placeholder_type.is_empty() {
            return Err(LabelError::invalid_option(
                "placeholder_type",
                "must not be empty",
            ));
        }
        for (option, value) in [
            ("placeholder_type", &self.placeholder_type),
            ("placeholder_content", &self.placeholder_content),
        ] {
            if value.contains(['{', '}', '\n']) {
                return Err(LabelError::invalid_option(
                    option,
                    format!("'{}' contains a brace or line break", value),
                ));
            }
        }
        Ok(())
    }
}
