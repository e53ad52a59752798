//! The blocking read-eval-print loop.

use crate::command::{self, CommandRegistry};
use crate::context::ShellContext;
use crate::error::ShellError;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

const MENU: &str = "\n======= Menu =======
1. mkdir <folder_name>
2. cd <path>
3. ls [path]
4. touch <file_name>
5. cat <file_path>
6. echo <file_path> <content>
7. mv <source> <destination>
8. cp <source> <destination>
9. rm <path>
10. grep <pattern> [path]
11. save_state <file_path>
12. load_state <file_path>
13. exit";

/// Shared error printer; every handler failure ends up here.
pub fn display_error<W: Write>(out: &mut W, err: &ShellError) -> io::Result<()> {
    warn!(error = %err, "command failed");
    writeln!(out, "Error: {}", err)
}

/// Run until `exit` or end of input. Only I/O errors on `output` abort the
/// loop; command failures are printed and the loop carries on.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    ctx: &mut ShellContext,
    registry: &CommandRegistry,
) -> io::Result<()> {
    let mut line = String::new();
    while ctx.is_running() {
        if ctx.options.show_menu {
            writeln!(output, "{}", MENU)?;
        }
        write!(output, "{}", ctx.options.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            writeln!(output, "Exiting...")?;
            ctx.exit();
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match command::run_command(trimmed, ctx, registry) {
            Ok(text) => writeln!(output, "{}", text)?,
            Err(e) => display_error(output, &e)?,
        }
    }
    Ok(())
}
