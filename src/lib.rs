// interactive filesystem shell
// a fixed menu of verbs, each one a single OS call
pub mod command;
pub mod commands;
pub mod context;
pub mod error;
pub mod shell;
pub mod storage;

pub use command::{run_command, Command, CommandRegistry};
pub use context::{ShellContext, ShellOptions, ShellState};
pub use error::{CommandResult, ShellError};
