use crate::command::{Command, CommandResult};
use crate::context::ShellContext;
use crate::error::ShellError;
use std::fs;
use std::io::ErrorKind;
use tracing::info;

pub struct MkdirCommand;

const USAGE: &str = "Usage: mkdir <folder_name>";

impl Command for MkdirCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let name = args.first().ok_or_else(|| ShellError::missing(USAGE))?;
        let path = ctx.resolve(name);

        match fs::create_dir(&path) {
            Ok(()) => {
                info!(path = %path.display(), "created directory");
                Ok(format!("Directory '{}' created successfully!", name))
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(ShellError::AlreadyExists(format!("Directory '{}' already exists!", name)))
            }
            Err(e) => Err(ShellError::io(format!("Error creating directory '{}'", name), e)),
        }
    }
}
