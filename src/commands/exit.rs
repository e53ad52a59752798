use crate::command::{Command, CommandResult};
use crate::context::ShellContext;

pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> CommandResult {
        ctx.exit();
        Ok("Exiting...".to_string())
    }
}
