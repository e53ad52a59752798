use crate::command::{Command, CommandResult};
use crate::context::ShellContext;
use crate::error::ShellError;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// cp SOURCE DEST
/// Files are copied shallowly (into DEST when DEST is a directory);
/// directories are copied recursively to a new DEST.
pub struct CpCommand;

const USAGE: &str = "Usage: cp <source> <destination>";

impl Command for CpCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let (source, dest) = match args {
            [s, d, ..] => (s, d),
            _ => return Err(ShellError::missing(USAGE)),
        };
        let src = ctx.resolve(source);
        let dst = ctx.resolve(dest);

        let denied = || ShellError::PermissionDenied(format!("Permission denied to copy '{}' to '{}'.", source, dest));
        let failed = |e: io::Error| match e.kind() {
            ErrorKind::PermissionDenied => denied(),
            _ => ShellError::io(format!("Error copying file/directory '{}'", source), e),
        };

        let meta = fs::metadata(&src).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ShellError::NotFound(format!("Source path '{}' does not exist!", source)),
            _ => failed(e),
        })?;

        if meta.is_file() {
            let target = into_dir(&src, &dst);
            fs::copy(&src, &target).map_err(failed)?;
            info!(from = %src.display(), to = %target.display(), "copied file");
            Ok(format!("File '{}' copied to '{}' successfully!", source, dest))
        } else if meta.is_dir() {
            if dst.exists() {
                return Err(ShellError::AlreadyExists(format!(
                    "Error copying file/directory '{}': destination '{}' already exists",
                    source, dest
                )));
            }
            if dst.starts_with(&src) {
                return Err(ShellError::InvalidArgument(format!(
                    "Cannot copy a directory '{}' into itself '{}'.",
                    source, dest
                )));
            }
            copy_dir_recursive(&src, &dst).map_err(failed)?;
            info!(from = %src.display(), to = %dst.display(), "copied directory");
            Ok(format!("Directory '{}' copied to '{}' successfully!", source, dest))
        } else {
            Err(ShellError::InvalidArgument(format!("Invalid source path '{}'.", source)))
        }
    }
}

// a file copied onto a directory lands inside it under its own name
pub(crate) fn into_dir(src: &Path, dst: &Path) -> PathBuf {
    match src.file_name() {
        Some(name) if dst.is_dir() => dst.join(name),
        _ => dst.to_path_buf(),
    }
}

/// Copy `src` to a not-yet-existing `dst`, following symlinks the way a
/// plain tree copy does.
pub(crate) fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if fs::metadata(&from)?.is_dir() {
            copy_dir_recursive(&from, &to)?;
        } else {
            debug!(from = %from.display(), "copy");
            fs::copy(&from, &to)?;
        }
    }
    Ok(())
}
