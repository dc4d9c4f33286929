//! `pagepush` deployment: the single command this tool runs.

use crate::config::Config;
use crate::core::commit_message;
use crate::logger;
use crate::pipeline::{CommandRunner, Outcome, ShellRunner, plan, run_pipeline};
use crate::{debug, log};
use anyhow::Result;
use chrono::Local;

/// Commit, push, and sync the publishing branch using the configured shell.
pub fn deploy_site(words: &[String], config: &Config) -> Result<Outcome> {
    let mut runner = ShellRunner::new(config.deploy.shell.clone());
    deploy_with(&mut runner, words)
}

/// Run the deployment against any command runner.
pub fn deploy_with<R: CommandRunner>(runner: &mut R, words: &[String]) -> Result<Outcome> {
    logger::section("🚀 PORTFOLIO DEPLOYMENT");

    let message = commit_message(words, Local::now());
    println!("\n📝 Commit Message: {message}");

    let outcome = run_pipeline(runner, &plan(&message))?;
    match outcome {
        Outcome::Completed => print_completion(),
        Outcome::NothingToDo => debug!("deploy"; "nothing to deploy"),
        Outcome::Aborted { step } => log!("deploy"; "stopped after `{step}` failed"),
    }
    Ok(outcome)
}

/// Lines under the closing banner. The live estimate is fixed, not measured.
const COMPLETION_NOTES: [&str; 3] = [
    "📦 Changes pushed to main branch",
    "🌐 GitHub Pages updated",
    "⏱️  Site will be live in 1-2 minutes",
];

fn print_completion() {
    logger::completion(&COMPLETION_NOTES);
}
