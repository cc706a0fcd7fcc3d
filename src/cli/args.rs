//! CLI argument definitions using clap.
//!
//! Running with no arguments scans the current directory with the config found
//! there (or the built-in defaults). All flags are optional overrides.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root to scan
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Config file (default: search for .i18nguardrc.json from the root upward)
    #[arg(long, env = "I18N_GUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Report file path (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the default configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}
