//! Emoji Destroyer - strip emoji code points from text files in place
//!
//! Walks files and directories, skips hidden and binary files, removes every
//! character that falls in a fixed table of emoji ranges, and rewrites only
//! the files that changed.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, confirmation, reporting)
//! - `core`: Validation, classification, filtering and the processing pipeline
//! - `fs`: Filesystem capability trait with disk and in-memory backends

pub mod cli;
pub mod core;
pub mod fs;
