//! Finding the command a new label refers to
//!
//! The search is deliberately local: only the line before the cursor and the
//! current line up to the cursor are scanned for a sectioning command or a
//! `\caption`. Captions take their type from the first `\end{...}` after the
//! cursor, which is normally the float they sit in.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::Serialize;

use super::buffer::TextBuffer;
use super::options::LabelOptions;
use super::slug::slugify;
use crate::data::maps::{
    command_label_type, environment_label_type, CAPTION_COMMAND, COMMAND_LABEL_TYPES,
};

lazy_static! {
    /// `\<command>[opt]...{content}` for every sectioning command and `\caption`
    static ref LABELLED_COMMAND_RE: Regex = {
        let commands: Vec<&str> = COMMAND_LABEL_TYPES
            .keys()
            .copied()
            .chain(std::iter::once(CAPTION_COMMAND))
            .collect();
        Regex::new(&format!(
            r"\\(?P<command>{})(?:\[[^\]]*\])*\{{(?P<content>[^}}]+)\}}",
            commands.join("|")
        ))
        .unwrap()
    };

    /// `\end{name}`
    static ref ENV_END_RE: Regex = Regex::new(r"\\end\{(\w+)\}").unwrap();
}

/// Label type and content inferred from the text before a cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelContext {
    pub label_type: String,
    pub label_content: String,
}

impl LabelContext {
    pub fn new(label_type: impl Into<String>, label_content: impl Into<String>) -> Self {
        Self {
            label_type: label_type.into(),
            label_content: label_content.into(),
        }
    }
}

/// Infer the label for `pos` with default options.
pub fn locate<B: TextBuffer + ?Sized>(buffer: &B, pos: usize) -> LabelContext {
    locate_with(buffer, pos, &LabelOptions::default())
}

/// Infer the label for `pos`.
///
/// Only the first (leftmost) command in the search window is considered.
/// When nothing matches, both placeholders from `options` are returned.
pub fn locate_with<B: TextBuffer + ?Sized>(
    buffer: &B,
    pos: usize,
    options: &LabelOptions,
) -> LabelContext {
    let pos = buffer.clamp_position(pos);
    let window = buffer.substr(search_window_start(buffer, pos)..pos);

    let Some(caps) = LABELLED_COMMAND_RE.captures(&window) else {
        debug!("no labelled command before position {}", pos);
        return LabelContext::new(
            options.placeholder_type(),
            options.placeholder_content.clone(),
        );
    };

    let command = &caps["command"];
    let label_content = content_slug(&caps["content"], options);
    let label_type = if command == CAPTION_COMMAND {
        enclosing_environment_type(buffer, pos)
    } else {
        command_label_type(command)
    };
    debug!(
        "\\{} before position {} gives type {:?}, content {:?}",
        command, pos, label_type, label_content
    );

    LabelContext {
        label_type: label_type
            .map_or_else(|| options.placeholder_type().to_string(), str::to_string),
        label_content,
    }
}

/// Start of the line preceding the one containing `pos`, or of the current
/// line when it is the first one.
pub fn search_window_start<B: TextBuffer + ?Sized>(buffer: &B, pos: usize) -> usize {
    let line_start = buffer.line_range(pos).start;
    match line_start.checked_sub(1) {
        Some(prev_line_end) => buffer.line_range(prev_line_end).start,
        None => 0,
    }
}

/// Label type of the environment closed by the first `\end{...}` at or after
/// `pos`, if it is a known float.
pub fn enclosing_environment_type<B: TextBuffer + ?Sized>(
    buffer: &B,
    pos: usize,
) -> Option<&'static str> {
    let found = buffer.find(&ENV_END_RE, pos)?;
    let text = buffer.substr(found);
    let caps = ENV_END_RE.captures(&text)?;
    let env_type = environment_label_type(&caps[1]);
    if env_type.is_none() {
        debug!("\\end{{{}}} does not close a labelled float", &caps[1]);
    }
    env_type
}

fn content_slug(content: &str, options: &LabelOptions) -> String {
    let slug = slugify(content);
    if options.fill_empty_content && !slug.bytes().any(|b| b.is_ascii_alphanumeric()) {
        options.placeholder_content.clone()
    } else {
        slug
    }
}
