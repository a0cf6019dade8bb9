//! Core label inference
//!
//! - `label`: locating the labelled command, slugifying, composing the label

pub mod label;
