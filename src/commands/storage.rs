use crate::command::{Command, CommandResult};
use crate::commands::cd::enter;
use crate::context::ShellContext;
use crate::error::ShellError;
use crate::storage::{self, PersistedState, StorageError};
use tracing::info;

/// save_state FILE
/// Write the current working directory to FILE as JSON.
pub struct SaveStateCommand;

/// load_state FILE
/// Restore the working directory recorded by save_state.
pub struct LoadStateCommand;

impl Command for SaveStateCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let file = args.first().ok_or_else(|| ShellError::missing("Usage: save_state <file_path>"))?;
        let path = ctx.resolve(file);

        storage::save_state(&path, &PersistedState::new(&ctx.cwd)).map_err(|e| match e {
            StorageError::Io(source) => ShellError::io(format!("Error saving state to '{}'", file), source),
            other => ShellError::InvalidArgument(format!("Error saving state to '{}': {}", file, other)),
        })?;

        info!(path = %path.display(), cwd = %ctx.cwd.display(), "state saved");
        Ok(format!("State saved to '{}' successfully!", file))
    }
}

impl Command for LoadStateCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let file = args.first().ok_or_else(|| ShellError::missing("Usage: load_state <file_path>"))?;
        let path = ctx.resolve(file);

        let state = storage::load_state(&path).map_err(|e| match e {
            StorageError::NotFound => ShellError::NotFound(format!("State file '{}' does not exist!", file)),
            StorageError::Corrupt(reason) => ShellError::CorruptState {
                path: file.clone(),
                reason: reason.to_string(),
            },
            StorageError::Io(source) => ShellError::io(format!("Error loading state from '{}'", file), source),
        })?;

        // the recorded directory may be gone or locked by now
        let stored = state.cwd.to_string_lossy();
        let dir = enter(&ctx.resolve(&stored), &stored).map_err(|e| match e {
            ShellError::NotFound(_) => {
                ShellError::NotFound(format!("Directory '{}' from state file does not exist!", stored))
            }
            ShellError::PermissionDenied(reason) => {
                ShellError::PermissionDenied(format!("Error loading state from '{}': {}", file, reason))
            }
            other => other,
        })?;

        ctx.change_dir(dir);
        info!(path = %path.display(), cwd = %ctx.cwd.display(), "state loaded");
        Ok(format!("State loaded from '{}' successfully!", file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ShellContext) {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("work")).unwrap();
        let ctx = ShellContext::with_home(tmp.path().to_path_buf(), tmp.path().to_path_buf());
        (tmp, ctx)
    }

    #[test]
    fn test_save_then_load_restores_cwd() {
        let (tmp, mut ctx) = setup();
        ctx.change_dir(tmp.path().join("work"));

        let out = SaveStateCommand.execute(&["s.json".to_string()], &mut ctx).unwrap();
        assert_eq!(out, "State saved to 's.json' successfully!");
        assert!(tmp.path().join("work/s.json").is_file());

        ctx.change_dir(tmp.path().to_path_buf());
        let state_file = tmp.path().join("work/s.json").display().to_string();
        let out = LoadStateCommand.execute(&[state_file.clone()], &mut ctx).unwrap();
        assert_eq!(out, format!("State loaded from '{}' successfully!", state_file));
        assert_eq!(ctx.cwd, fs::canonicalize(tmp.path().join("work")).unwrap());
    }

    #[test]
    fn test_saved_file_is_json_with_cwd() {
        let (tmp, mut ctx) = setup();
        SaveStateCommand.execute(&["s.json".to_string()], &mut ctx).unwrap();

        let raw = fs::read_to_string(tmp.path().join("s.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["cwd"], tmp.path().display().to_string());
    }

    #[test]
    fn test_load_missing_state_file() {
        let (_tmp, mut ctx) = setup();
        let err = LoadStateCommand.execute(&["none.json".to_string()], &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "State file 'none.json' does not exist!");
    }

    #[test]
    fn test_load_without_cwd_key_is_corrupt() {
        let (tmp, mut ctx) = setup();
        fs::write(tmp.path().join("bad.json"), r#"{"path": "/tmp"}"#).unwrap();
        let before = ctx.cwd.clone();

        let err = LoadStateCommand.execute(&["bad.json".to_string()], &mut ctx).unwrap_err();
        assert!(matches!(err, ShellError::CorruptState { .. }));
        assert_eq!(ctx.cwd, before);
    }

    #[test]
    fn test_load_vanished_directory() {
        let (tmp, mut ctx) = setup();
        let gone = tmp.path().join("gone");
        fs::write(
            tmp.path().join("old.json"),
            serde_json::json!({ "cwd": gone }).to_string(),
        )
        .unwrap();

        let err = LoadStateCommand.execute(&["old.json".to_string()], &mut ctx).unwrap_err();
        assert!(matches!(err, ShellError::NotFound(_)));
        assert_eq!(ctx.cwd, tmp.path());
    }

    #[test]
    fn test_load_relative_cwd_resolves_against_shell_dir() {
        let (tmp, mut ctx) = setup();
        fs::write(tmp.path().join("rel.json"), r#"{"cwd": "work"}"#).unwrap();

        LoadStateCommand.execute(&["rel.json".to_string()], &mut ctx).unwrap();
        assert_eq!(ctx.cwd, fs::canonicalize(tmp.path().join("work")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_load_unsearchable_directory_is_refused() {
        use std::os::unix::fs::PermissionsExt;

        let (tmp, mut ctx) = setup();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(
            tmp.path().join("s.json"),
            serde_json::json!({ "cwd": locked }).to_string(),
        )
        .unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores mode bits, nothing to check there
        let searchable = fs::metadata(locked.join(".")).is_ok();
        let result = LoadStateCommand.execute(&["s.json".to_string()], &mut ctx);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if searchable {
            return;
        }

        let err = result.unwrap_err();
        assert!(matches!(err, ShellError::PermissionDenied(_)));
        assert!(err.to_string().starts_with("Error loading state from 's.json'"));
        assert_eq!(ctx.cwd, tmp.path());
    }
}
