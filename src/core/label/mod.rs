//! Automatic `\label` generation
//!
//! Given a document and a cursor position, infers the label type from the
//! nearest preceding sectioning command or caption, slugifies its argument,
//! and works out which part of `\label{...}` still has to be typed.
//!
//! ```
//! use texlabel::core::label::compose;
//!
//! let doc = "\\section{Foo Bar}\n";
//! assert_eq!(compose(doc, 17).render(), "\\label{sec:foo_bar}");
//! ```

pub mod buffer;
pub mod compose;
pub mod insert;
pub mod locate;
pub mod options;
pub mod slug;
pub mod snippet;

pub use buffer::TextBuffer;
pub use compose::{compose, compose_with, label_affixes, LabelResult};
pub use insert::{apply_edits, plan_insertions, Edit, Insertion, Selection};
pub use locate::{locate, locate_with, LabelContext};
pub use options::{InsertionStyle, LabelOptions};
pub use slug::slugify;
pub use snippet::{Snippet, SnippetPart};
