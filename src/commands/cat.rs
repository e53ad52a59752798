use crate::command::{Command, CommandResult};
use crate::context::ShellContext;
use crate::error::ShellError;
use std::fs;
use std::io::ErrorKind;

pub struct CatCommand;

impl Command for CatCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let filename = args
            .first()
            .ok_or_else(|| ShellError::missing("'cat' command requires a file path."))?;
        let path = ctx.resolve(filename);

        if path.is_dir() {
            return Err(ShellError::InvalidArgument(format!(
                "'{}' is a directory, not a file.",
                filename
            )));
        }

        let bytes = fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ShellError::NotFound(format!("File '{}' does not exist!", filename)),
            ErrorKind::PermissionDenied => {
                ShellError::PermissionDenied(format!("Permission denied to read '{}'.", filename))
            }
            _ => ShellError::io(format!("Error reading file '{}'", filename), e),
        })?;

        // binary files are reported, not dumped
        String::from_utf8(bytes)
            .map_err(|_| ShellError::InvalidArgument(format!("'{}' is a binary file, not displayed.", filename)))
    }
}
