//! Compile-time lookup tables for label inference.

use phf::{phf_map, phf_ordered_map};

/// Sectioning command name → label type tag.
///
/// Ordered: the command regex tries the alternatives in this order.
pub static COMMAND_LABEL_TYPES: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "part" => "part",
    "chapter" => "cha",
    "section" => "sec",
    "subsection" => "sub",
    "subsubsection" => "ssub",
    "paragraph" => "par",
};

/// Float environment name → label type tag, used to type `\caption` labels.
pub static ENVIRONMENT_LABEL_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "figure" => "fig",
    "table" => "tab",
    "listing" => "lst",
};

/// Accented characters spelled out as ASCII digraphs in label slugs.
pub static DIACRITIC_REPLACEMENTS: phf::Map<char, &'static str> = phf_map! {
    'ü' => "ue",
    'ä' => "ae",
    'ö' => "oe",
    'ß' => "ss",
};

/// Caption command; its label type comes from the enclosing environment.
pub const CAPTION_COMMAND: &str = "caption";

/// Type tag used when no type could be inferred.
pub const UNKNOWN_LABEL_TYPE: &str = "???";

/// Content used when no labelled command was found.
pub const DEFAULT_LABEL_CONTENT: &str = "label";

/// Look up the label type of a sectioning command.
pub fn command_label_type(command: &str) -> Option<&'static str> {
    COMMAND_LABEL_TYPES.get(command).copied()
}

/// Look up the label type of an environment.
pub fn environment_label_type(env: &str) -> Option<&'static str> {
    ENVIRONMENT_LABEL_TYPES.get(env).copied()
}
