use crate::command::{Command, CommandResult};
use crate::context::ShellContext;
use crate::error::ShellError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let target = match args.first() {
            None => {
                // cd with no args goes home, classic unix behavior
                let home = ctx.home.clone();
                let dir = enter(&home, "~")?;
                ctx.change_dir(dir);
                return Ok(format!("Changed to home directory: {}", ctx.cwd.display()));
            }
            Some(t) => t,
        };

        let path = if target == "-" {
            // cd - swaps to previous directory
            match &ctx.previous {
                Some(prev) => prev.clone(),
                None => return Err(ShellError::InvalidArgument("No previous directory".to_string())),
            }
        } else {
            ctx.resolve(target)
        };

        let dir = enter(&path, target)?;
        debug!(from = %ctx.cwd.display(), to = %dir.display(), "cd");
        ctx.change_dir(dir);
        Ok(format!("Changed to directory '{}': {}", target, ctx.cwd.display()))
    }
}

// check the target is a directory we can search, return its canonical form
pub(crate) fn enter(path: &Path, shown: &str) -> Result<PathBuf, ShellError> {
    let missing = || ShellError::NotFound(format!("Directory '{}' does not exist!", shown));
    let denied = || ShellError::PermissionDenied(format!("Permission denied to access '{}'", shown));

    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(missing()),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => return Err(denied()),
        Err(_) => return Err(missing()),
    }

    // stat of dir/. needs search permission on dir
    if let Err(e) = fs::metadata(path.join(".")) {
        if e.kind() == ErrorKind::PermissionDenied {
            return Err(denied());
        }
    }

    fs::canonicalize(path).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => denied(),
        ErrorKind::NotFound => missing(),
        _ => ShellError::io(format!("Error changing to '{}'", shown), e),
    })
}
