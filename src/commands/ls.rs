use crate::command::{Command, CommandResult};
use crate::context::ShellContext;
use crate::error::ShellError;
use std::fs;
use std::io::ErrorKind;

pub struct LsCommand;

impl Command for LsCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let shown = args.first().map(String::as_str).unwrap_or(".");
        let path = ctx.resolve(shown);

        let entries = fs::read_dir(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ShellError::NotFound(format!("Directory '{}' does not exist!", shown)),
            ErrorKind::PermissionDenied => {
                ShellError::PermissionDenied(format!("Permission denied to list '{}'.", shown))
            }
            _ if path.is_file() => ShellError::InvalidArgument(format!("'{}' is not a directory.", shown)),
            _ => ShellError::io(format!("Error listing directory '{}'", shown), e),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ShellError::io(format!("Error listing directory '{}'", shown), e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        if names.is_empty() {
            return Ok(format!("The directory '{}' is empty.", path.display()));
        }
        let mut output = format!("Contents of '{}':", path.display());
        for name in names {
            output.push('\n');
            output.push_str(&name);
        }
        Ok(output)
    }
}
