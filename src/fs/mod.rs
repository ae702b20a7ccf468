//! Filesystem access behind a small capability trait.
//!
//! The pipeline in [`crate::core`] never touches `std::fs` directly. It asks a
//! [`FileSystem`] whether a path exists, reads samples and whole files, and
//! writes cleaned text back. [`OsFs`] is the real disk; unit tests use an
//! in-memory tree that records every read and write to prove which files were
//! touched.

use std::{
    fs::{self, File},
    io::{self, Read},
    path::{Path, PathBuf},
};

use walkdir::WalkDir;


#[cfg(test)]
pub use memory::MemoryFs;

/// Iterator over the regular files found below a walk root.
pub type FileWalk<'a> = Box<dyn Iterator<Item = io::Result<PathBuf>> + 'a>;

pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Resolve relative segments and symlinks.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Fails unless the path can be opened for reading. Directories must be listable.
    fn check_readable(&self, path: &Path) -> io::Result<()>;

    /// Read at most `limit` bytes from the start of a file.
    fn read_sample(&self, path: &Path, limit: usize) -> io::Result<Vec<u8>>;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the whole content of a file with a single write.
    fn write_text(&self, path: &Path, text: &str) -> io::Result<()>;

    /// Recursively enumerate regular files below `root`.
    ///
    /// `prune` receives each entry's path relative to `root`; entries for which it
    /// returns true are skipped, and directories are not descended into.
    /// Symlinked directories are never followed; symlinks to regular files are
    /// yielded.
    fn walk_files<'a>(
        &'a self,
        root: &'a Path,
        prune: &'a dyn Fn(&Path) -> bool,
    ) -> FileWalk<'a>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl FileSystem for OsFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn check_readable(&self, path: &Path) -> io::Result<()> {
        if path.is_dir() {
            fs::read_dir(path).map(|_| ())
        } else {
            File::open(path).map(|_| ())
        }
    }

    fn read_sample(&self, path: &Path, limit: usize) -> io::Result<Vec<u8>> {
        let mut sample = Vec::with_capacity(limit);
        File::open(path)?
            .take(limit as u64)
            .read_to_end(&mut sample)?;
        Ok(sample)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write_text(&self, path: &Path, text: &str) -> io::Result<()> {
        fs::write(path, text)
    }

    fn walk_files<'a>(
        &'a self,
        root: &'a Path,
        prune: &'a dyn Fn(&Path) -> bool,
    ) -> FileWalk<'a> {
        let files = WalkDir::new(root)
            .into_iter()
            .filter_entry(move |entry| {
                entry.depth() == 0
                    || !prune(entry.path().strip_prefix(root).unwrap_or(entry.path()))
            })
            .filter_map(|entry| match entry {
                Ok(entry) => entry.path().is_file().then(|| Ok(entry.into_path())),
                Err(err) => Some(Err(io::Error::from(err))),
            });
        Box::new(files)
    }
}
