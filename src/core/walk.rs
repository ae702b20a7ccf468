use std::path::Path;

use colored::Colorize;

use super::{
    Interrupted,
    classify::{classify_entry, is_hidden},
    destroy::Session,
};

impl Session<'_> {
    /// Recursively process every eligible file below `root`.
    ///
    /// Hidden entries are checked relative to `root` and hidden directories are
    /// not entered. Entries that cannot be enumerated are skipped.
    pub(super) fn walk_directory(&mut self, root: &Path) -> Result<(), Interrupted> {
        println!("Scanning directory: {}", root.display());

        let fs = self.fs;
        let verbose = self.options.verbose;
        let prune = is_hidden;

        for entry in fs.walk_files(root, &prune) {
            self.check_interrupted()?;

            let path = match entry {
                Ok(path) => path,
                Err(err) => {
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), err);
                    }
                    continue;
                }
            };

            let relative = path.strip_prefix(root).unwrap_or(&path);
            let classification = classify_entry(fs, &path, relative);
            if !classification.is_text() {
                if verbose {
                    eprintln!(
                        "{} Skipped {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        classification.reason()
                    );
                }
                continue;
            }

            if self.first_visit(&path) {
                self.process(&path);
            }
        }

        Ok(())
    }
}
