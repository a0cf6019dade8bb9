//! Read-only document access for label inference.
//!
//! The host editor owns the document; the inference engine only needs range
//! reads, line lookup and a forward regex search. Positions are UTF-8 byte
//! offsets.

use std::borrow::Cow;
use std::ops::Range;

use regex::Regex;

/// Read-only view over document text.
pub trait TextBuffer {
    /// Length of the document in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text in `range`, after clamping both ends with [`TextBuffer::clamp_position`].
    fn substr(&self, range: Range<usize>) -> Cow<'_, str>;

    /// Range of the line containing `pos`, excluding the line break.
    fn line_range(&self, pos: usize) -> Range<usize>;

    /// First match of `pattern` starting at or after `from`.
    fn find(&self, pattern: &Regex, from: usize) -> Option<Range<usize>>;

    /// Clamp `pos` into the document: past-the-end positions move to the end,
    /// positions inside a character move to its start.
    fn clamp_position(&self, pos: usize) -> usize;

    /// Whether `pos` can be used as-is without clamping.
    fn is_valid_position(&self, pos: usize) -> bool {
        pos <= self.len() && self.clamp_position(pos) == pos
    }
}

impl TextBuffer for str {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn substr(&self, range: Range<usize>) -> Cow<'_, str> {
        let start = TextBuffer::clamp_position(self, range.start);
        let end = TextBuffer::clamp_position(self, range.end).max(start);
        Cow::Borrowed(&self[start..end])
    }

    fn line_range(&self, pos: usize) -> Range<usize> {
        let pos = TextBuffer::clamp_position(self, pos);
        let start = self[..pos].rfind('\n').map_or(0, |i| i + 1);
        let end = self[pos..].find('\n').map_or(str::len(self), |i| pos + i);
        start..end
    }

    fn find(&self, pattern: &Regex, from: usize) -> Option<Range<usize>> {
        let from = TextBuffer::clamp_position(self, from);
        pattern.find_at(self, from).map(|m| m.range())
    }

    fn clamp_position(&self, pos: usize) -> usize {
        let mut pos = pos.min(str::len(self));
        while !self.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }
}

impl TextBuffer for String {
    fn len(&self) -> usize {
        self.as_str().len()
    }

    fn substr(&self, range: Range<usize>) -> Cow<'_, str> {
        self.as_str().substr(range)
    }

    fn line_range(&self, pos: usize) -> Range<usize> {
        self.as_str().line_range(pos)
    }

    fn find(&self, pattern: &Regex, from: usize) -> Option<Range<usize>> {
        TextBuffer::find(self.as_str(), pattern, from)
    }

    fn clamp_position(&self, pos: usize) -> usize {
        TextBuffer::clamp_position(self.as_str(), pos)
    }
}

/// Byte offset of the UTF-16 code unit offset `offset` in `text`.
///
/// Offsets inside a surrogate pair or past the end map to the next character
/// boundary or the end.
pub fn utf16_to_byte_offset(text: &str, offset: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in text.char_indices() {
        if units >= offset {
            return idx;
        }
        units += ch.len_utf16();
    }
    text.len()
}

/// UTF-16 code unit offset of the byte offset `offset` in `text`.
pub fn byte_to_utf16_offset(text: &str, offset: usize) -> usize {
    let offset = TextBuffer::clamp_position(text, offset);
    text[..offset].chars().map(char::len_utf16).sum()
}
