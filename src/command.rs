use crate::context::ShellContext;
use crate::error::ShellError;
use std::collections::HashMap;
use tracing::{debug, info};

pub use crate::error::CommandResult;

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult;
}

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command + Send + Sync>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: HashMap::new() }
    }
    pub fn register_command(&mut self, name: &str, cmd: Box<dyn Command + Send + Sync>) {
        self.commands.insert(name.to_lowercase(), cmd);
    }
    pub fn get(&self, name: &str) -> Option<&(dyn Command + Send + Sync)> {
        self.commands.get(&name.to_lowercase()).map(|c| c.as_ref())
    }
    pub fn get_command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }
    pub fn default_commands() -> Self {
        let mut reg = Self::new();
        reg.register_command("mkdir", Box::new(crate::commands::mkdir::MkdirCommand));
        reg.register_command("cd", Box::new(crate::commands::cd::CdCommand));
        reg.register_command("ls", Box::new(crate::commands::ls::LsCommand));
        reg.register_command("touch", Box::new(crate::commands::touch::TouchCommand));
        reg.register_command("cat", Box::new(crate::commands::cat::CatCommand));
        reg.register_command("echo", Box::new(crate::commands::echo::EchoCommand));
        reg.register_command("mv", Box::new(crate::commands::mv::MvCommand));
        reg.register_command("cp", Box::new(crate::commands::cp::CpCommand));
        reg.register_command("rm", Box::new(crate::commands::rm::RmCommand));
        reg.register_command("grep", Box::new(crate::commands::grep::GrepCommand));
        reg.register_command("save_state", Box::new(crate::commands::storage::SaveStateCommand));
        reg.register_command("load_state", Box::new(crate::commands::storage::LoadStateCommand));
        reg.register_command("exit", Box::new(crate::commands::exit::ExitCommand));
        reg
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::default_commands()
    }
}

pub fn run_command(input: &str, ctx: &mut ShellContext, registry: &CommandRegistry) -> CommandResult {
    let mut parts = input.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => return Ok(String::new()), // empty input = no-op
    };
    let args: Vec<String> = parts.map(|s| s.to_string()).collect();

    if ctx.options.trace_commands {
        info!(line = input.trim(), "+ trace");
    }

    match registry.get(cmd) {
        Some(command) => {
            debug!(command = %cmd.to_lowercase(), argc = args.len(), "dispatching");
            command.execute(&args, ctx)
        }
        None => Err(ShellError::InvalidCommand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    fn ctx() -> ShellContext {
        ShellContext::with_home(PathBuf::from("/"), PathBuf::from("/"))
    }

    #[test]
    fn test_registry_has_thirteen_verbs() {
        let reg = CommandRegistry::default_commands();
        assert_eq!(
            reg.get_command_names(),
            vec![
                "cat", "cd", "cp", "echo", "exit", "grep", "load_state", "ls", "mkdir", "mv",
                "rm", "save_state", "touch",
            ]
        );
    }

    #[test]
    fn test_empty_input_is_noop() {
        let reg = CommandRegistry::default_commands();
        let mut ctx = ctx();
        assert_eq!(run_command("   ", &mut ctx, &reg).unwrap(), "");
        assert!(ctx.is_running());
    }

    #[test]
    fn test_unknown_command() {
        let reg = CommandRegistry::default_commands();
        let mut ctx = ctx();
        let err = run_command("frobnicate now", &mut ctx, &reg).unwrap_err();
        assert!(matches!(err, ShellError::InvalidCommand));
        assert_eq!(err.to_string(), "Invalid command! Please enter a valid option.");
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged_run(line: &str, trace: bool) -> String {
        let buf = LogBuffer::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let reg = CommandRegistry::default_commands();
        let mut ctx = ctx();
        ctx.options.trace_commands = trace;
        tracing::subscriber::with_default(subscriber, || {
            run_command(line, &mut ctx, &reg).unwrap();
        });
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_trace_logs_each_line() {
        let logs = logged_run("exit right now", true);
        assert!(logs.contains("+ trace"), "{}", logs);
        assert!(logs.contains("exit right now"), "{}", logs);
    }

    #[test]
    fn test_no_trace_by_default() {
        let logs = logged_run("exit right now", false);
        assert!(!logs.contains("+ trace"), "{}", logs);
    }

    #[test]
    fn test_verbs_are_case_insensitive() {
        let reg = CommandRegistry::default_commands();
        let mut ctx = ctx();
        let out = run_command("EXIT", &mut ctx, &reg).unwrap();
        assert_eq!(out, "Exiting...");
        assert!(!ctx.is_running());
    }
}
