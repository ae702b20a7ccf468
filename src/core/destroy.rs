use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;

use super::{Interrupted, RunOptions, ScanResult, classify::classify, process::process_file};
use crate::fs::FileSystem;

/// Process every input path, files directly and directories by walking them.
///
/// A file reachable from several inputs is processed once. The interrupt flag
/// in `options` is checked before each file.
pub fn destroy_emojis_in_paths(
    fs: &dyn FileSystem,
    paths: &[PathBuf],
    options: &RunOptions,
) -> Result<ScanResult, Interrupted> {
    let mut session = Session::new(fs, options);
    println!("Starting emoji destruction mission...");

    for path in paths {
        session.check_interrupted()?;

        if fs.is_file(path) {
            let classification = classify(fs, path);
            if !classification.is_text() {
                println!("Skipped {}: Not a processable text file", path.display());
                if options.verbose {
                    eprintln!(
                        "{} {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        classification.reason()
                    );
                }
                continue;
            }
            if session.first_visit(path) {
                println!("Processing file: {}", path.display());
                session.process(path);
            }
        } else if fs.is_dir(path) {
            session.walk_directory(path)?;
        }
    }

    // A Ctrl+C during the last file must still stop the run.
    session.check_interrupted()?;
    Ok(session.totals)
}

/// Walk a single directory tree.
pub fn destroy_emojis_in_directory(
    fs: &dyn FileSystem,
    root: &Path,
    options: &RunOptions,
) -> Result<ScanResult, Interrupted> {
    let mut session = Session::new(fs, options);
    session.walk_directory(root)?;
    session.check_interrupted()?;
    Ok(session.totals)
}

/// State of one run: running totals and the files already seen.
pub(super) struct Session<'a> {
    pub(super) fs: &'a dyn FileSystem,
    pub(super) options: &'a RunOptions,
    visited: HashSet<PathBuf>,
    totals: ScanResult,
}

impl<'a> Session<'a> {
    fn new(fs: &'a dyn FileSystem, options: &'a RunOptions) -> Self {
        Self {
            fs,
            options,
            visited: HashSet::new(),
            totals: ScanResult::default(),
        }
    }

    pub(super) fn check_interrupted(&self) -> Result<(), Interrupted> {
        if self.options.is_interrupted() {
            Err(Interrupted {
                partial: self.totals,
            })
        } else {
            Ok(())
        }
    }

    /// Returns false if this file was already processed under another name.
    pub(super) fn first_visit(&mut self, path: &Path) -> bool {
        let key = self
            .fs
            .canonicalize(path)
            .unwrap_or_else(|_| path.to_path_buf());
        self.visited.insert(key)
    }

    pub(super) fn process(&mut self, path: &Path) {
        process_file(self.fs, path, &mut self.totals);
    }
}
