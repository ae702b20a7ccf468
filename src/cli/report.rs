//! Output formatting for the CLI.
//!
//! Every printer has a `_to` variant that takes a writer, used by tests.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::core::ScanResult;

const BANNER: &str = r#"
     _____ __  __  ___       _ ___ ____
    | ____|  \/  |/ _ \     | |_ _/ ___|
    |  _| | |\/| | | | |_   | || |\___ \
    | |___| |  | | |_| | |__| || | ___) |
    |_____|_|  |_|\___/ \____/|___|____/

         D  E  S  T  R  O  Y  E  D
"#;

/// An input path and whether it is a file or a directory.
pub struct Target<'a> {
    pub path: &'a Path,
    pub is_file: bool,
}

pub fn print_targets(targets: &[Target<'_>]) {
    print_targets_to(targets, &mut io::stdout().lock());
}

pub fn print_targets_to<W: Write>(targets: &[Target<'_>], writer: &mut W) {
    let _ = writeln!(writer, "Target paths:");
    for target in targets {
        let _ = writeln!(
            writer,
            "  {} ({})",
            target.path.display(),
            if target.is_file { "file" } else { "directory" }
        );
    }
}

pub fn print_summary(totals: &ScanResult) {
    print_summary_to(totals, &mut io::stdout().lock());
    print_skipped_warning_to(totals.files_skipped, &mut io::stderr().lock());
}

pub fn print_summary_to<W: Write>(totals: &ScanResult, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Files processed: {}",
        totals.files_processed.to_string().bold()
    );
    let _ = writeln!(
        writer,
        "Total emojis destroyed: {}",
        totals.emojis_destroyed.to_string().bold().green()
    );
}

pub fn print_skipped_warning_to<W: Write>(count: usize, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be processed",
            "warning:".bold().yellow(),
            count
        );
    }
}

pub fn print_banner() {
    print_banner_to(&mut io::stdout().lock());
}

pub fn print_banner_to<W: Write>(writer: &mut W) {
    let _ = writeln!(writer, "{}", BANNER.red().bold());
}
