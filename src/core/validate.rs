use std::{
    io,
    path::{Path, PathBuf},
};

use colored::Colorize;
use thiserror::Error;

use crate::fs::FileSystem;

/// Why an input path was rejected before any work started.
#[derive(Debug, Error)]
pub enum InvalidPath {
    #[error("Invalid path '{0}': path is empty")]
    Empty(PathBuf),
    #[error("Path '{0}' does not exist.")]
    NotFound(PathBuf),
    #[error("Path '{0}' is not readable.")]
    NotReadable(PathBuf),
    #[error("Cannot access path '{path}': {source}")]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Resolve `path` and check that it exists and can be read.
///
/// Returns the canonical path on success.
pub fn check_path(fs: &dyn FileSystem, path: &Path) -> Result<PathBuf, InvalidPath> {
    if path.as_os_str().is_empty() {
        return Err(InvalidPath::Empty(path.to_path_buf()));
    }

    let resolved = fs
        .canonicalize(path)
        .map_err(|err| classify_error(path, err))?;

    fs.check_readable(&resolved)
        .map_err(|err| classify_error(path, err))?;

    Ok(resolved)
}

/// Check `path`, printing a diagnostic to stderr when it is invalid.
pub fn validate_path(fs: &dyn FileSystem, path: &Path) -> bool {
    match check_path(fs, path) {
        Ok(_) => true,
        Err(err) => {
            eprintln!("{} {}", "Error:".bold().red(), err);
            false
        }
    }
}

fn classify_error(path: &Path, err: io::Error) -> InvalidPath {
    let path = path.to_path_buf();
    match err.kind() {
        io::ErrorKind::NotFound => InvalidPath::NotFound(path),
        io::ErrorKind::PermissionDenied => InvalidPath::NotReadable(path),
        _ => InvalidPath::Inaccessible { path, source: err },
    }
}
