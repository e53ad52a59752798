use crate::command::{Command, CommandResult};
use crate::commands::cp::{copy_dir_recursive, into_dir};
use crate::context::ShellContext;
use crate::error::ShellError;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;
use tracing::{info, warn};

pub struct MvCommand;

const USAGE: &str = "Usage: mv <source> <destination>";

impl Command for MvCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let (source, dest) = match args {
            [s, d, ..] => (s, d),
            _ => return Err(ShellError::missing(USAGE)),
        };
        let src = ctx.resolve(source);
        let dst = ctx.resolve(dest);

        let denied = || {
            ShellError::PermissionDenied(format!("Permission denied to move '{}' to '{}'", source, dest))
        };

        let meta = fs::symlink_metadata(&src).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ShellError::NotFound(format!("Source path '{}' does not exist!", source)),
            ErrorKind::PermissionDenied => denied(),
            _ => ShellError::io(format!("Error moving file/directory '{}'", source), e),
        })?;

        let target = into_dir(&src, &dst);
        if target != dst && target.exists() {
            return Err(ShellError::AlreadyExists(format!(
                "Error moving file/directory: Destination path '{}' already exists",
                target.display()
            )));
        }
        if meta.is_dir() && target.starts_with(&src) {
            return Err(ShellError::InvalidArgument(format!(
                "Error moving file/directory: Cannot move a directory '{}' into itself '{}'",
                source, dest
            )));
        }

        move_path(&src, &target, meta.is_dir()).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => denied(),
            _ => ShellError::io("Error moving file/directory", e),
        })?;

        info!(from = %src.display(), to = %target.display(), "moved");
        Ok(format!(
            "Moving '{}' to '{}'\n'{}' moved to '{}' successfully!",
            source, dest, source, dest
        ))
    }
}

// rename, falling back to copy + delete across filesystems
fn move_path(src: &Path, dst: &Path, is_dir: bool) -> io::Result<()> {
    match fs::rename(src, dst) {
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            warn!(from = %src.display(), to = %dst.display(), "rename crosses devices, copying");
            copy_then_remove(src, dst, is_dir)
        }
        other => other,
    }
}

fn copy_then_remove(src: &Path, dst: &Path, is_dir: bool) -> io::Result<()> {
    if is_dir {
        copy_dir_recursive(src, dst)?;
        fs::remove_dir_all(src)
    } else {
        fs::copy(src, dst)?;
        fs::remove_file(src)
    }
}
