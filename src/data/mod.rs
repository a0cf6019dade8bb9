//! Static data tables
//!
//! Fixed lookup tables shared by the label inference engine.

pub mod maps;

pub use maps::{COMMAND_LABEL_TYPES, DIACRITIC_REPLACEMENTS, ENVIRONMENT_LABEL_TYPES};
