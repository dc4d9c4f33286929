//! Process-wide interrupt state.
//!
//! Two flags:
//! - `SHUTDOWN`: Has shutdown been requested? (Ctrl+C received)
//! - `IN_STEP`: How many step child processes are currently running?

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Shutdown has been requested (Ctrl+C received)
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Number of running step child processes
/// - `0`: Ctrl+C exits the process right away
/// - otherwise: the child gets the signal too; the runner reports the interrupt
static IN_STEP: AtomicUsize = AtomicUsize::new(0);

/// Message printed when the operator interrupts a deployment.
pub const CANCELLED_MESSAGE: &str = "Deployment cancelled by user";

/// Setup the global Ctrl+C handler. Call once at program start
///
/// The handler behavior depends on whether a step is running:
/// - Outside a step: print the cancellation message and exit with status 1
/// - Inside a step: set the SHUTDOWN flag, the step runner turns it into
///   `DeployError::Interrupted` once the child exits
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        SHUTDOWN.store(true, Ordering::SeqCst);

        if IN_STEP.load(Ordering::SeqCst) == 0 {
            println!();
            crate::logger::warning(CANCELLED_MESSAGE);
            std::process::exit(1);
        }
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Check if shutdown has been requested
pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::SeqCst)
}

/// Marks a step's child process as running until dropped.
pub struct StepGuard(());

impl StepGuard {
    pub fn enter() -> Self {
        IN_STEP.fetch_add(1, Ordering::SeqCst);
        Self(())
    }
}

impl Drop for StepGuard {
    fn drop(&mut self) {
        IN_STEP.fetch_sub(1, Ordering::SeqCst);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_guard() {
        let _guard = StepGuard::enter();
        assert!(IN_STEP.load(Ordering::SeqCst) >= 1);
    }

    #[test]
    fn test_not_shutdown_by_default() {
        assert!(!is_shutdown());
    }
}
