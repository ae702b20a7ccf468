//! Text/binary classification of candidate files.
//!
//! A file is eligible when no component of its path is hidden, its extension
//! is not a known binary format, and the first [`SAMPLE_SIZE`] bytes decode to
//! text with few NUL characters. This is a heuristic; it can be wrong in both
//! directions.

use std::path::{Component, Path};

use crate::fs::FileSystem;

/// Number of bytes inspected by the content check.
pub const SAMPLE_SIZE: usize = 1024;

/// Files whose sample has at least this share of NUL characters are binary.
pub const NULL_RATIO_THRESHOLD: f64 = 0.1;

/// Extensions rejected without reading the file (compared case-insensitively).
pub const BINARY_EXTENSIONS: &[&str] = &[
    // executables and libraries
    "exe", "bin", "dll", "so", "dylib", "a", "lib",
    // images
    "jpg", "jpeg", "png", "gif", "bmp", "ico", "svg",
    // audio and video
    "mp3", "mp4", "avi", "mov", "wav", "flac",
    // archives
    "zip", "tar", "gz", "rar", "7z",
    // documents
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
    // python bytecode and wheels
    "pyc", "pyo", "pyd", "whl",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClassification {
    Text,
    Hidden,
    BinaryExtension,
    BinaryContent,
    Unreadable,
}

impl FileClassification {
    pub fn is_text(self) -> bool {
        self == Self::Text
    }

    pub fn reason(self) -> &'static str {
        match self {
            Self::Text => "text file",
            Self::Hidden => "hidden path",
            Self::BinaryExtension => "binary file extension",
            Self::BinaryContent => "binary content",
            Self::Unreadable => "cannot be read",
        }
    }
}

/// Classify a file using the path as given for the hidden check.
pub fn classify(fs: &dyn FileSystem, path: &Path) -> FileClassification {
    classify_entry(fs, path, path)
}

/// Classify `path`, applying the hidden check to `relative` only.
///
/// The walker passes the path relative to its root, so a walk started inside
/// a dot-directory the user named explicitly still sees its files.
pub fn classify_entry(fs: &dyn FileSystem, path: &Path, relative: &Path) -> FileClassification {
    if is_hidden(relative) {
        return FileClassification::Hidden;
    }
    if has_binary_extension(path) {
        return FileClassification::BinaryExtension;
    }
    match fs.read_sample(path, SAMPLE_SIZE) {
        Ok(sample) if looks_like_text(&sample) => FileClassification::Text,
        Ok(_) => FileClassification::BinaryContent,
        Err(_) => FileClassification::Unreadable,
    }
}

/// True if any normal component of the path starts with a dot.
///
/// `.` and `..` are navigation, not hidden names.
pub fn is_hidden(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

pub fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.as_str()))
}

/// Decode the sample leniently and check its share of NUL characters.
pub fn looks_like_text(sample: &[u8]) -> bool {
    let decoded = String::from_utf8_lossy(sample);
    let (total, nulls) = decoded.chars().fold((0usize, 0usize), |(total, nulls), c| {
        (total + 1, nulls + usize::from(c == '\0'))
    });
    if total == 0 {
        return true;
    }
    (nulls as f64 / total as f64) < NULL_RATIO_THRESHOLD
}
