//! Deployment pipeline.
//!
//! Runs the fixed plan from [`step::plan`] one step at a time:
//!
//! ```text
//! status → add → commit → push main → checkout gh-pages
//!        → reset --hard main → push -f gh-pages → checkout main
//! ```
//!
//! Each step goes through [`run_step`], which turns a command's exit status
//! into a `bool`. The step's [`OnFailure`] policy then decides whether the
//! pipeline continues. Only [`DeployError`]s (interrupt, spawn failure,
//! undecodable output) escape as `Err`, skipping any further step or cleanup.

mod error;
mod runner;
mod step;

pub use error::DeployError;
pub use runner::{CommandRunner, ShellRunner};
pub use step::{OnFailure, Step, StepResult, plan, return_to_primary};

use crate::{debug, logger};

// =============================================================================
// Types
// =============================================================================

/// How a pipeline run ended, short of a `DeployError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every step ran; the last one returned to the primary branch.
    Completed,
    /// The status check failed; nothing was changed.
    NothingToDo,
    /// A fatal step failed. Cleanup, if any, has already been attempted.
    Aborted { step: &'static str },
}

// =============================================================================
// Execution
// =============================================================================

/// Run a single step, printing its banners and output.
///
/// Returns whether the command exited with status zero.
pub fn run_step<R: CommandRunner>(runner: &mut R, step: &Step) -> Result<bool, DeployError> {
    logger::step_started(step.description);
    debug!("exec"; "{}", step.command);

    let result = runner.run(&step.command)?;

    if result.success {
        logger::step_output(&result.stdout);
        logger::step_succeeded(step.description);
    } else {
        logger::step_failed(step.description, &result.stderr);
    }
    Ok(result.success)
}

/// Run `steps` in order, applying each step's failure policy.
pub fn run_pipeline<R: CommandRunner>(
    runner: &mut R,
    steps: &[Step],
) -> Result<Outcome, DeployError> {
    for step in steps {
        if run_step(runner, step)? {
            continue;
        }

        match step.on_failure {
            OnFailure::Continue(warning) => logger::warning(warning),
            OnFailure::NothingToDo(warning) => {
                logger::warning(warning);
                return Ok(Outcome::NothingToDo);
            }
            OnFailure::Abort => {
                return Ok(Outcome::Aborted {
                    step: step.description,
                });
            }
            OnFailure::ReturnThenAbort => {
                // Best effort: the checkout's own result does not change the outcome.
                run_step(runner, &return_to_primary())?;
                return Ok(Outcome::Aborted {
                    step: step.description,
                });
            }
        }
    }

    Ok(Outcome::Completed)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Runner that records commands and fails (or interrupts) on request.
    #[derive(Default)]
    struct ScriptedRunner {
        fail: Vec<&'static str>,
        interrupt_on: Option<&'static str>,
        ran: Vec<String>,
    }

    impl ScriptedRunner {
        fn failing(fail: &[&'static str]) -> Self {
            Self {
                fail: fail.to_vec(),
                ..Default::default()
            }
        }

        fn count(&self, command: &str) -> usize {
            self.ran.iter().filter(|c| *c == command).count()
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&mut self, command: &str) -> Result<StepResult, DeployError> {
            self.ran.push(command.to_owned());
            if self.interrupt_on == Some(command) {
                return Err(DeployError::Interrupted);
            }
            let success = !self.fail.iter().any(|f| *f == command);
            Ok(StepResult {
                success,
                stdout: if success { "ok".into() } else { String::new() },
                stderr: if success { String::new() } else { "boom".into() },
            })
        }
    }

    const COMMIT: &str = "git commit -m \"msg\"";

    #[test]
    fn test_all_steps_succeed() {
        let mut runner = ScriptedRunner::default();
        let outcome = run_pipeline(&mut runner, &plan("msg")).unwrap();

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(
            runner.ran,
            [
                "git status --short",
                "git add -A",
                COMMIT,
                "git push origin main",
                "git checkout gh-pages",
                "git reset --hard main",
                "git push -f origin gh-pages",
                "git checkout main",
            ]
        );
    }

    #[test]
    fn test_status_failure_stops_everything() {
        let mut runner = ScriptedRunner::failing(&["git status --short"]);
        let outcome = run_pipeline(&mut runner, &plan("msg")).unwrap();

        assert_eq!(outcome, Outcome::NothingToDo);
        assert_eq!(runner.ran, ["git status --short"]);
    }

    #[test]
    fn test_add_failure_aborts() {
        let mut runner = ScriptedRunner::failing(&["git add -A"]);
        let outcome = run_pipeline(&mut runner, &plan("msg")).unwrap();

        assert_eq!(
            outcome,
            Outcome::Aborted {
                step: "Adding all changes"
            }
        );
        assert_eq!(runner.ran.len(), 2);
    }

    #[test]
    fn test_commit_failure_still_pushes() {
        let mut runner = ScriptedRunner::failing(&[COMMIT]);
        let outcome = run_pipeline(&mut runner, &plan("msg")).unwrap();

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(runner.count("git push origin main"), 1);
        assert_eq!(runner.ran.len(), 8);
    }

    #[test]
    fn test_push_failure_stays_on_main() {
        let mut runner = ScriptedRunner::failing(&["git push origin main"]);
        let outcome = run_pipeline(&mut runner, &plan("msg")).unwrap();

        assert!(matches!(outcome, Outcome::Aborted { .. }));
        assert_eq!(runner.ran.last().unwrap(), "git push origin main");
        assert_eq!(runner.count("git checkout gh-pages"), 0);
    }

    #[test]
    fn test_checkout_failure_aborts_without_cleanup() {
        let mut runner = ScriptedRunner::failing(&["git checkout gh-pages"]);
        let outcome = run_pipeline(&mut runner, &plan("msg")).unwrap();

        assert!(matches!(outcome, Outcome::Aborted { .. }));
        assert_eq!(runner.count("git checkout main"), 0);
    }

    #[test]
    fn test_reset_failure_returns_to_main_once() {
        let mut runner = ScriptedRunner::failing(&["git reset --hard main"]);
        let outcome = run_pipeline(&mut runner, &plan("msg")).unwrap();

        assert_eq!(
            outcome,
            Outcome::Aborted {
                step: "Syncing gh-pages with main"
            }
        );
        assert_eq!(runner.count("git checkout main"), 1);
        assert_eq!(runner.ran.last().unwrap(), "git checkout main");
        assert_eq!(runner.count("git push -f origin gh-pages"), 0);
    }

    #[test]
    fn test_force_push_failure_returns_to_main_once() {
        let mut runner = ScriptedRunner::failing(&["git push -f origin gh-pages"]);
        let outcome = run_pipeline(&mut runner, &plan("msg")).unwrap();

        assert_eq!(
            outcome,
            Outcome::Aborted {
                step: "Force pushing to gh-pages"
            }
        );
        assert_eq!(runner.count("git checkout main"), 1);
    }

    #[test]
    fn test_failed_cleanup_still_reports_abort() {
        let mut runner =
            ScriptedRunner::failing(&["git reset --hard main", "git checkout main"]);
        let outcome = run_pipeline(&mut runner, &plan("msg")).unwrap();

        assert!(matches!(outcome, Outcome::Aborted { .. }));
        assert_eq!(runner.count("git checkout main"), 1);
    }

    #[test]
    fn test_final_checkout_failure_aborts() {
        let mut runner = ScriptedRunner::failing(&["git checkout main"]);
        let outcome = run_pipeline(&mut runner, &plan("msg")).unwrap();

        assert_eq!(
            outcome,
            Outcome::Aborted {
                step: "Returning to main branch"
            }
        );
        assert_eq!(runner.ran.len(), 8);
    }

    #[test]
    fn test_interrupt_stops_without_cleanup() {
        let mut runner = ScriptedRunner {
            interrupt_on: Some("git reset --hard main"),
            ..Default::default()
        };
        let err = run_pipeline(&mut runner, &plan("msg")).unwrap_err();

        assert!(matches!(err, DeployError::Interrupted));
        assert_eq!(runner.ran.last().unwrap(), "git reset --hard main");
        assert_eq!(runner.count("git checkout main"), 0);
    }

    #[test]
    fn test_run_step_reports_exit_status() {
        let step = return_to_primary();

        let mut ok = ScriptedRunner::default();
        assert!(run_step(&mut ok, &step).unwrap());

        let mut failing = ScriptedRunner::failing(&["git checkout main"]);
        assert!(!run_step(&mut failing, &step).unwrap());
    }
}
