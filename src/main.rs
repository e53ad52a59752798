use anyhow::{bail, Context, Result};
use clap::Parser;
use dirshell::{shell, CommandRegistry, ShellContext, ShellOptions};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dirshell", version, about = "Menu-driven filesystem shell")]
struct Args {
    /// Directory to start in (defaults to the process working directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Prompt shown before each command
    #[arg(long, env = "DIRSHELL_PROMPT", default_value = "Enter your command: ")]
    prompt: String,

    /// Do not print the verb menu before every prompt
    #[arg(long)]
    no_menu: bool,

    /// Log every dispatched command line
    #[arg(long)]
    trace: bool,

    /// Log filter, e.g. "debug" or "dirshell=info" (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    // stderr keeps log lines out of the shell's own output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref());

    let start = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    let start = start
        .canonicalize()
        .with_context(|| format!("cannot open starting directory '{}'", start.display()))?;
    if !start.is_dir() {
        bail!("starting path '{}' is not a directory", start.display());
    }

    let options = ShellOptions {
        show_menu: !args.no_menu,
        prompt: args.prompt,
        trace_commands: args.trace,
    };
    let mut ctx = ShellContext::new(start).with_options(options);
    let registry = CommandRegistry::default_commands();

    tracing::info!(cwd = %ctx.cwd.display(), "shell started");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell::run(stdin.lock(), &mut stdout, &mut ctx, &registry).context("shell I/O failed")?;
    Ok(())
}
