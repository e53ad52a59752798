use crate::command::{Command, CommandResult};
use crate::commands::unquote;
use crate::context::ShellContext;
use crate::error::ShellError;
use std::fs;
use tracing::info;

/// echo FILE [TEXT]...
/// Overwrite FILE with TEXT, the words re-joined by single spaces.
pub struct EchoCommand;

const USAGE: &str = "Usage: echo <file_path> <content>";

impl Command for EchoCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let (file, words) = args.split_first().ok_or_else(|| ShellError::missing(USAGE))?;
        let file = unquote(file);
        if file.is_empty() {
            return Err(ShellError::missing(USAGE));
        }
        let joined = words.join(" ");
        let content = unquote(&joined);
        let path = ctx.resolve(file);

        fs::write(&path, content)
            .map_err(|e| ShellError::io(format!("Error writing to file '{}'", file), e))?;

        info!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(format!("Text written to file '{}' successfully!", file))
    }
}
