use crate::command::{Command, CommandResult};
use crate::context::ShellContext;
use crate::error::ShellError;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;

pub struct GrepCommand;

impl Command for GrepCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let pattern = args.first().ok_or_else(|| {
            ShellError::missing("Please provide a search pattern and optionally a file path.")
        })?;
        let filename = args.get(1).map(String::as_str).unwrap_or(".");

        let regex = Regex::new(pattern)
            .map_err(|e| ShellError::InvalidArgument(format!("Invalid regex pattern: {}", e)))?;

        let path = ctx.resolve(filename);
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                return Err(ShellError::InvalidArgument(format!("'{}' is not a regular file.", filename)))
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(ShellError::PermissionDenied(format!("Permission denied to read '{}'.", filename)))
            }
            Err(_) => return Err(ShellError::NotFound(format!("File '{}' does not exist!", filename))),
        }

        let bytes = fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => {
                ShellError::PermissionDenied(format!("Permission denied to read '{}'.", filename))
            }
            _ => ShellError::io("Error searching file", e),
        })?;
        // stray invalid bytes should not hide the rest of the file
        let content = String::from_utf8_lossy(&bytes);

        let matches: Vec<&str> = content
            .lines()
            .filter(|line| regex.is_match(line))
            .map(str::trim)
            .collect();

        if matches.is_empty() {
            return Ok(format!(
                "No lines matching the pattern '{}' found in '{}'.",
                pattern, filename
            ));
        }
        let mut output = format!("Lines matching the pattern '{}' in '{}':", pattern, filename);
        for line in matches {
            output.push('\n');
            output.push_str(line);
        }
        Ok(output)
    }
}
