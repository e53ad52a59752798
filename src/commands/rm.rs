use crate::command::{Command, CommandResult};
use crate::context::ShellContext;
use crate::error::ShellError;
use std::fs;
use std::io::{self, ErrorKind};
use tracing::info;

/// rm PATH
/// Remove a file, or a directory and everything below it.
pub struct RmCommand;

impl Command for RmCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let name = args.first().ok_or_else(|| ShellError::missing("Usage: rm <path>"))?;
        let path = ctx.resolve(name);

        let failed = |e: io::Error| match e.kind() {
            ErrorKind::PermissionDenied => {
                ShellError::PermissionDenied(format!("Permission denied to remove '{}'.", name))
            }
            _ => ShellError::io(format!("Error removing file/directory '{}'", name), e),
        };

        if path.is_file() {
            fs::remove_file(&path).map_err(failed)?;
            info!(path = %path.display(), "removed file");
            Ok(format!("File '{}' removed successfully!", name))
        } else if path.is_dir() {
            fs::remove_dir_all(&path).map_err(failed)?;
            info!(path = %path.display(), "removed directory");
            Ok(format!("Directory '{}' removed successfully!", name))
        } else {
            Err(ShellError::InvalidArgument(format!("Invalid path '{}'.", name)))
        }
    }
}
