//! Errors raised at the console boundary. The tree itself has none: every operation is defined
//! for every tree and every key.

use std::io;

use thiserror::Error;

use crate::exitcode;

/// Text that couldn't be turned into something the menu understands. These are reported back
/// to the user and the prompt is shown again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The selector or key wasn't an `i32`.
    #[error("Invalid input: {0:?} is not an integer.")]
    NotAnInteger(String),

    /// The name didn't match any traversal order.
    #[error("unknown traversal order {0:?} (expected pre, in or post)")]
    UnknownOrder(String),
}

/// Failures that end a menu session.
#[derive(Error, Debug)]
pub enum MenuError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Result type for menu operations.
pub type MenuResult<T> = Result<T, MenuError>;

impl MenuError {
    /// The process exit code to report for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            MenuError::Io(_) => exitcode::IOERR,
        }
    }
}
