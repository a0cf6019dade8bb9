//! Slugification of free text into label identifiers.

use crate::data::maps::DIACRITIC_REPLACEMENTS;

/// Turn human text into a label-safe identifier over `[a-z0-9_]`.
///
/// Letters and digits are kept (lowercased), the characters in
/// [`DIACRITIC_REPLACEMENTS`] become their ASCII digraph, and every run of
/// other characters collapses into a single `_`. Leading and trailing
/// separators are kept, so `" Intro"` becomes `"_intro"`.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_underscore = false;
    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
            prev_underscore = false;
        } else if let Some(replacement) = DIACRITIC_REPLACEMENTS.get(&ch) {
            out.push_str(replacement);
            prev_underscore = false;
        } else if !prev_underscore {
            out.push('_');
            prev_underscore = true;
        }
    }
    out
}
