mod commands;
mod error;
mod repl;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::error::{exit_code_for, report_error};
use phonebook_config as config;
use phonebook_core::AddressBook;

#[derive(Debug, Parser)]
#[command(name = "phonebook", version, about = "Interactive contact book")]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        verbose,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let mut book = AddressBook::new();
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    repl::run(stdin, &mut stdout, &app_config.repl, &mut book)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
