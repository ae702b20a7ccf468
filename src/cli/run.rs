use std::{
    io,
    path::{self, PathBuf},
    sync::atomic::Ordering,
};

use anyhow::{Context, Result};

use super::{
    args::Arguments,
    exit_status::ExitStatus,
    prompt::{self, Confirmation},
    report::{self, Target},
};
use crate::{
    core::{RunOptions, destroy_emojis_in_paths, validate_path},
    fs::{FileSystem, OsFs},
};

/// Validate, confirm, then strip emojis from every target.
///
/// Invalid paths stop the run before anything is written.
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let fs = OsFs;

    for path in &args.paths {
        if !validate_path(&fs, path) {
            return Ok(ExitStatus::Failure);
        }
    }

    let absolute = args
        .paths
        .iter()
        .map(|p| {
            path::absolute(p).with_context(|| format!("Cannot resolve path '{}'", p.display()))
        })
        .collect::<Result<Vec<PathBuf>>>()?;
    let targets: Vec<Target<'_>> = absolute
        .iter()
        .zip(&args.paths)
        .map(|(abs, path)| Target {
            path: abs,
            is_file: fs.is_file(path),
        })
        .collect();
    report::print_targets(&targets);

    if !args.yes {
        let answer = prompt::confirm(&mut io::stdin().lock(), &mut io::stdout().lock())
            .context("Failed to read confirmation")?;
        match answer {
            Confirmation::Confirmed => {}
            Confirmation::Declined => {
                println!("Mission aborted.");
                return Ok(ExitStatus::Success);
            }
            Confirmation::Closed => {
                println!("\nMission aborted.");
                return Ok(ExitStatus::Success);
            }
        }
    }

    let options = RunOptions::new(args.verbose);
    let interrupted = options.interrupt_flag();
    ctrlc::set_handler(move || interrupted.store(true, Ordering::SeqCst))
        .context("Failed to set Ctrl+C handler")?;

    match destroy_emojis_in_paths(&fs, &args.paths, &options) {
        Ok(totals) => {
            report::print_summary(&totals);
            if !args.no_banner {
                report::print_banner();
            }
            Ok(ExitStatus::Success)
        }
        Err(err) => {
            println!("\n{}", err);
            report::print_summary(&err.partial);
            Ok(ExitStatus::Interrupted)
        }
    }
}
