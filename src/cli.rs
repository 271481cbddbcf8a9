//! Command-line interface shared by both hook binaries.
//! Baker runs hooks without arguments; the flags exist for running a hook
//! by hand against a saved payload.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for a hook binary.
#[derive(Parser, Debug)]
#[command(author, version, about = "Baker template hook", long_about = None)]
pub struct Args {
    /// Read the hook payload (JSON or YAML) from FILE instead of stdin
    #[arg(long, value_name = "FILE")]
    pub context: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Parses command line arguments, exiting through clap on bad input.
pub fn get_args() -> Args {
    Args::parse()
}
