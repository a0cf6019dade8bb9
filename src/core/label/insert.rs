//! Planning label insertions for every cursor
//!
//! All labels are computed against the same unmodified document before any
//! edit is applied. Edits are then applied from the end of the document
//! backwards so that earlier offsets stay valid.

use std::ops::Range;

use log::warn;
use serde::Serialize;

use super::buffer::TextBuffer;
use super::compose::{compose_with, LabelResult};
use super::options::LabelOptions;
use super::snippet::Snippet;
use crate::utils::error::{LabelError, LabelErrorResult};

/// A cursor or selection; the label is computed at `head`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// An empty selection (a plain cursor) at `pos`
    pub fn point(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    pub fn range(&self) -> Range<usize> {
        self.anchor.min(self.head)..self.anchor.max(self.head)
    }
}

/// What to put into the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Insertion {
    Snippet(Snippet),
    Text(String),
}

impl Insertion {
    /// Document text after insertion, with snippet defaults accepted.
    pub fn expanded(&self) -> String {
        match self {
            Insertion::Snippet(snippet) => snippet.expand(),
            Insertion::Text(text) => text.clone(),
        }
    }
}

/// Replace `range` with `insertion`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edit {
    pub range: Range<usize>,
    pub insertion: Insertion,
    pub label: LabelResult,
}

/// Compute one edit per selection.
///
/// Selections covering the same range are merged, as editors merge
/// duplicate carets. Snippets replace the selected text, as templated insertion does in
/// editors; plain text is inserted at the head and leaves the selection.
pub fn plan_insertions<B: TextBuffer + ?Sized>(
    buffer: &B,
    selections: &[Selection],
    options: &LabelOptions,
) -> LabelErrorResult<Vec<Edit>> {
    options.validate()?;
    for sel in selections {
        for pos in [sel.anchor, sel.head] {
            if !buffer.is_valid_position(pos) {
                warn!("rejecting cursor at {} in a {} byte buffer", pos, buffer.len());
                return Err(LabelError::invalid_position(pos, buffer.len()));
            }
        }
    }

    let mut unique: Vec<Selection> = Vec::with_capacity(selections.len());
    for sel in selections {
        if !unique.iter().any(|u| u.range() == sel.range()) {
            unique.push(*sel);
        }
    }

    let use_snippet = options.style.uses_snippet(unique.len());
    let edits = unique
        .iter()
        .map(|sel| {
            let label = compose_with(buffer, sel.head, options);
            let (range, insertion) = if use_snippet {
                (sel.range(), Insertion::Snippet(label.snippet()))
            } else {
                (sel.head..sel.head, Insertion::Text(label.render()))
            };
            Edit {
                range,
                insertion,
                label,
            }
        })
        .collect();
    Ok(edits)
}

/// Apply `edits` to `text`, accepting snippet defaults.
///
/// Edits are applied in descending order of position; edits whose range
/// overlaps an already applied one, or does not fit `text`, are skipped.
pub fn apply_edits(text: &str, edits: &[Edit]) -> String {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by(|a, b| {
        b.range
            .start
            .cmp(&a.range.start)
            .then(b.range.end.cmp(&a.range.end))
    });

    let mut out = text.to_string();
    let mut applied_start = usize::MAX;
    for edit in ordered {
        let Range { start, end } = edit.range;
        if end > applied_start {
            warn!("skipping overlapping edit at {:?}", edit.range);
            continue;
        }
        if start > end || !out.is_char_boundary(start) || !out.is_char_boundary(end) {
            warn!("skipping edit with invalid range {:?}", edit.range);
            continue;
        }
        out.replace_range(start..end, &edit.insertion.expanded());
        applied_start = start;
    }
    out
}
