//! Error taxonomy shared by every command handler.

use std::io;
use thiserror::Error;

/// Everything a command can report back to the shell loop.
///
/// Handlers never print their own failures; they return one of these and
/// the loop hands it to [`crate::shell::display_error`].
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Invalid command! Please enter a valid option.")]
    InvalidCommand,

    #[error("{usage}")]
    MissingArgument { usage: String },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    PermissionDenied(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("State file '{path}' is corrupt: {reason}")]
    CorruptState { path: String, reason: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl ShellError {
    pub fn missing(usage: impl Into<String>) -> Self {
        ShellError::MissingArgument { usage: usage.into() }
    }

    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        ShellError::Io { context: context.into(), source }
    }
}

pub type CommandResult = Result<String, ShellError>;
