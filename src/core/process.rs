use std::{borrow::Cow, io, path::Path};

use colored::Colorize;
use thiserror::Error;

use super::{ScanResult, filter::remove_emojis};
use crate::fs::FileSystem;

/// Per-file failure. Logged and skipped; never aborts a run.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Permission denied")]
    PermissionDenied,
    #[error("Encoding error")]
    Encoding,
    #[error("{0}")]
    Io(io::Error),
}

impl From<io::Error> for ProcessError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::InvalidData => Self::Encoding,
            _ => Self::Io(err),
        }
    }
}

/// What happened to one file that was processed successfully.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileOutcome {
    pub emojis_destroyed: usize,
    pub rewritten: bool,
    /// Invalid UTF-8 was replaced with U+FFFD while decoding.
    pub lossy: bool,
}

/// Strip emojis from one file in place.
///
/// The file is decoded leniently. It is only written back, in one write, when
/// at least one emoji was removed.
pub fn destroy_emojis_in_file(
    fs: &dyn FileSystem,
    path: &Path,
) -> Result<FileOutcome, ProcessError> {
    let bytes = fs.read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let lossy = matches!(text, Cow::Owned(_));

    let (cleaned, emojis_destroyed) = remove_emojis(&text);
    let rewritten = emojis_destroyed > 0;
    if rewritten {
        fs.write_text(path, &cleaned)?;
    }

    Ok(FileOutcome {
        emojis_destroyed,
        rewritten,
        lossy,
    })
}

/// Process one file, log the outcome, and fold it into `totals`.
pub fn process_file(fs: &dyn FileSystem, path: &Path, totals: &mut ScanResult) {
    match destroy_emojis_in_file(fs, path) {
        Ok(outcome) => {
            if outcome.rewritten {
                if outcome.lossy {
                    eprintln!(
                        "{} {} contained invalid UTF-8; it was written back with replacement characters",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
                println!(
                    "Destroyed {} emojis in {}",
                    outcome.emojis_destroyed,
                    path.display()
                );
            }
            totals.record(&outcome);
        }
        Err(err) => {
            println!("Skipped {}: {}", path.display(), err);
            totals.files_skipped += 1;
        }
    }
}
