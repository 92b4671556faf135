use std::sync::Mutex;

use clap::Parser;
use console::style;
use kresour::cli::{self, Cli};
use kresour::errors::KresourError;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled_stderr(false);
    }

    if let Err(e) = init_logging(&cli) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    if let Err(e) = cli::browse::handle_browse() {
        let class = e.classify();
        tracing::debug!(
            error_type = class.error_type,
            startup_fatal = class.startup_fatal,
            "Exiting after error"
        );
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(class.exit_code);
    }
}

/// The browser owns the whole terminal, so logs always go to a file.
fn init_logging(cli: &Cli) -> Result<(), KresourError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    let file = std::fs::File::create(cli.log_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
