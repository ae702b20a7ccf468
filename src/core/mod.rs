//! Core emoji removal pipeline.
//!
//! ## Stages
//!
//! 1. **Validate**: every input path must exist and be readable (`validate`)
//! 2. **Discover**: inputs are taken as files or walked as directories (`destroy`, `walk`)
//! 3. **Classify**: hidden and binary files are skipped (`classify`)
//! 4. **Filter**: emoji code points are dropped from the text (`ranges`, `filter`)
//! 5. **Rewrite**: files that changed are written back (`process`)
//!
//! All stages are sequential and go through [`crate::fs::FileSystem`].

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use thiserror::Error;

pub mod classify;
pub mod destroy;
pub mod filter;
pub mod process;
pub mod ranges;
pub mod validate;
mod walk;

pub use classify::{FileClassification, classify};
pub use destroy::{destroy_emojis_in_directory, destroy_emojis_in_paths};
pub use filter::remove_emojis;
pub use process::{FileOutcome, ProcessError, destroy_emojis_in_file, process_file};
pub use ranges::{EMOJI_RANGES, EmojiRangeTable};
pub use validate::{InvalidPath, check_path, validate_path};

/// Totals accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Files read and filtered without error, rewritten or not.
    pub files_processed: usize,
    pub emojis_destroyed: usize,
    /// Files actually written back.
    pub files_modified: usize,
    /// Files that failed with a per-file error.
    pub files_skipped: usize,
}

impl ScanResult {
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.files_processed += 1;
        self.emojis_destroyed += outcome.emojis_destroyed;
        if outcome.rewritten {
            self.files_modified += 1;
        }
    }
}

/// Settings shared by every stage of a run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Report skipped files and walk errors.
    pub verbose: bool,
    interrupted: Arc<AtomicBool>,
}

impl RunOptions {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            interrupted: Arc::default(),
        }
    }

    /// Flag that stops the run before the next file once set.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}

/// The run was stopped by the user. Files already rewritten stay rewritten.
#[derive(Debug, Clone, Copy, Error)]
#[error("Operation interrupted by user.")]
pub struct Interrupted {
    pub partial: ScanResult,
}
