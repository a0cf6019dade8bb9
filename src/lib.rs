//! # texlabel
//!
//! Automatic LaTeX `\label` generation for editors.
//!
//! Given the document text and a cursor, texlabel looks at the line before
//! the cursor and the current line for a sectioning command or a caption,
//! turns it into a label like `sec:related_work` or `fig:loss_curve`, and
//! works out whether `\label{`, `{` or nothing has to be inserted before it.
//!
//! ## Features
//!
//! - **Type inference**: `\section` → `sec`, `\chapter` → `cha`, ... and
//!   `\caption` typed by its float (`figure` → `fig`, `table` → `tab`,
//!   `listing` → `lst`)
//! - **Slugs**: lowercase `[a-z0-9_]` identifiers with German umlauts spelled out
//! - **Multi-cursor**: one plan for all cursors, applied as a single batch
//! - **WASM**: bindings for editor extensions (feature `wasm`)
//!
//! ## Quick Start
//!
//! ```
//! use texlabel::{compose, locate, slugify};
//!
//! assert_eq!(slugify("Über uns"), "ueber_uns");
//!
//! let doc = "\\begin{figure}\n\\caption{Loss Curve}\n\\end{figure}";
//! let ctx = locate(doc, 35);
//! assert_eq!((ctx.label_type.as_str(), ctx.label_content.as_str()), ("fig", "loss_curve"));
//!
//! assert_eq!(compose("\\section{Intro}\\label", 21).render(), "{sec:intro}");
//! ```

pub mod core;
pub mod data;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::label::{
    apply_edits, compose, compose_with, label_affixes, locate, locate_with, plan_insertions,
    slugify, Edit, Insertion, InsertionStyle, LabelContext, LabelOptions, LabelResult, Selection,
    Snippet, SnippetPart, TextBuffer,
};
pub use utils::error::{LabelError, LabelErrorResult};
