//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Emoji Destroyer - Eliminate ALL emojis from your project",
    long_about = None,
    after_help = "Because sometimes you just need to say F$@# EMOJIS!"
)]
pub struct Arguments {
    /// Target files and/or directories to process
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Report skipped files and paths that could not be read
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not print the victory banner
    #[arg(long)]
    pub no_banner: bool,
}
