//! Faults that abort a deployment outright.
//!
//! A command exiting non-zero is not one of these; it becomes a failed
//! `StepResult` and the step's `OnFailure` policy decides what happens.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("interrupted by user")]
    Interrupted,

    #[error("failed to run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("output of `{command}` is not valid UTF-8")]
    Encoding {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
