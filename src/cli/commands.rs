use std::path::PathBuf;

use clap::Parser;

/// Log file name used under the temp directory when `--log-file` is absent.
pub const DEFAULT_LOG_FILE: &str = "kresour.log";

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("GIT_HASH"),
    "\nbuilt: ",
    env!("BUILD_TIMESTAMP"),
);

#[derive(Parser, Debug)]
#[command(
    name = "kresour",
    version,
    long_version = LONG_VERSION,
    about = "Browse a catalog of cybersecurity tools and their commands"
)]
pub struct Cli {
    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file (default: kresour.log in the temp directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Where logs are written. Never the terminal, which the browser draws on.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE))
    }
}
