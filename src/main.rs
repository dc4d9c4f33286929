//! pagepush - publish a static site to GitHub Pages.
//!
//! Commits the working tree, pushes `main`, force-syncs `gh-pages` to it,
//! pushes that too, and returns to `main`.

mod cli;
mod config;
mod core;
mod logger;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::Config;
use pipeline::{DeployError, Outcome};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version print to stdout and are not failures
            let code = u8::from(err.use_stderr());
            err.print().ok();
            return ExitCode::from(code);
        }
    };

    let result = run(&cli);
    if let Err(err) = &result {
        println!("\n\n{}", failure_message(err));
    }
    ExitCode::from(exit_status(&result))
}

/// 0 when the pipeline completed or stopped on a step failure, 1 on any fault.
fn exit_status(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(Outcome::Completed | Outcome::NothingToDo | Outcome::Aborted { .. }) => 0,
        Err(_) => 1,
    }
}

/// Final line for a run that ended in a fault.
fn failure_message(err: &anyhow::Error) -> String {
    if is_interrupt(err) {
        logger::warning_line(core::CANCELLED_MESSAGE)
    } else {
        format!("❌ Unexpected error: {err:#}")
    }
}

fn is_interrupt(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<DeployError>(), Some(DeployError::Interrupted))
}

fn run(cli: &Cli) -> Result<Outcome> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = Config::load(cli)?;
    logger::set_verbose(config.log.verbose);

    cli::deploy::deploy_site(&cli.message, &config)
}
