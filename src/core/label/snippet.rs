//! Tab-stop snippets
//!
//! Editors that support templated insertion take text with numbered
//! placeholders (`${1:default}`) that the user tabs through, and a final
//! cursor stop (`$0`).

use serde::Serialize;

/// One piece of a snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SnippetPart {
    /// Literal text
    Text { text: String },
    /// Numbered editable field, pre-filled with `default`
    TabStop { index: u32, default: String },
    /// Where the cursor ends up after the last field
    FinalStop,
}

/// A snippet built from parts, rendered on demand
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub parts: Vec<SnippetPart>,
}

impl Snippet {
    /// An empty snippet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text. Empty text is skipped.
    pub fn text(mut self, text: &str) -> Self {
        if !text.is_empty() {
            self.parts.push(SnippetPart::Text {
                text: text.to_string(),
            });
        }
        self
    }

    /// Append tab stop `index`, pre-filled with `default`.
    pub fn tab_stop(mut self, index: u32, default: &str) -> Self {
        self.parts.push(SnippetPart::TabStop {
            index,
            default: default.to_string(),
        });
        self
    }

    /// Append the final cursor stop (`$0`).
    pub fn final_stop(mut self) -> Self {
        self.parts.push(SnippetPart::FinalStop);
        self
    }

    /// Render in `${n:default}` template syntax.
    pub fn to_template(&self) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                SnippetPart::Text { text } => escape_into(&mut out, text, &['\\', '$']),
                SnippetPart::TabStop { index, default } => {
                    out.push_str(&format!("${{{}:", index));
                    escape_into(&mut out, default, &['\\', '$', '}']);
                    out.push('}');
                }
                SnippetPart::FinalStop => out.push_str("$0"),
            }
        }
        out
    }

    /// The text left in the document once every default is accepted.
    pub fn expand(&self) -> String {
        self.parts
            .iter()
            .map(|part| match part {
                SnippetPart::Text { text } => text.as_str(),
                SnippetPart::TabStop { default, .. } => default.as_str(),
                SnippetPart::FinalStop => "",
            })
            .collect()
    }
}

fn escape_into(out: &mut String, text: &str, special: &[char]) {
    for ch in text.chars() {
        if special.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
}
