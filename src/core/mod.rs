//! Core types shared across the codebase.

mod message;
mod state;

pub use message::commit_message;
pub use state::{CANCELLED_MESSAGE, StepGuard, is_shutdown, setup_shutdown_handler};
