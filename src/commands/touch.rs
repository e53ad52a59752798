use crate::command::{Command, CommandResult};
use crate::context::ShellContext;
use crate::error::ShellError;
use std::fs::OpenOptions;
use tracing::info;

/// touch FILE
/// Create FILE if it does not exist; an existing file keeps its content.
pub struct TouchCommand;

impl Command for TouchCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let name = args.first().ok_or_else(|| ShellError::missing("Usage: touch <file_name>"))?;
        let path = ctx.resolve(name);

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| ShellError::io(format!("Error creating file '{}'", name), e))?;

        info!(path = %path.display(), "touched file");
        Ok(format!("File '{}' created successfully!", name))
    }
}
