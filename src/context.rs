use std::path::{Component, Path, PathBuf};

pub struct ShellOptions {
    pub show_menu: bool,      // print the verb menu before every prompt
    pub prompt: String,
    pub trace_commands: bool, // log each dispatched line, like set -x
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            show_menu: true,
            prompt: "Enter your command: ".to_string(),
            trace_commands: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Exited,
}

/// Everything a command may read or change between prompts.
///
/// `cwd` is the shell's own notion of the working directory. It is always
/// absolute and lexically normalized; the process working directory is never
/// touched.
pub struct ShellContext {
    pub cwd: PathBuf,
    pub previous: Option<PathBuf>, // for cd -
    pub home: PathBuf,
    pub options: ShellOptions,
    pub state: ShellState,
}

impl ShellContext {
    pub fn new(cwd: PathBuf) -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        Self::with_home(cwd, home)
    }

    pub fn with_home(cwd: PathBuf, home: PathBuf) -> Self {
        Self {
            cwd: normalize_path(&cwd),
            previous: None,
            home,
            options: ShellOptions::default(),
            state: ShellState::Running,
        }
    }

    pub fn with_options(mut self, options: ShellOptions) -> Self {
        self.options = options;
        self
    }

    pub fn is_running(&self) -> bool {
        self.state == ShellState::Running
    }

    pub fn exit(&mut self) {
        self.state = ShellState::Exited;
    }

    /// Move to `dir`, remembering where we came from.
    pub fn change_dir(&mut self, dir: PathBuf) {
        let old = std::mem::replace(&mut self.cwd, normalize_path(&dir));
        self.previous = Some(old);
    }

    /// Turn a user-typed path into an absolute one against `cwd`.
    pub fn resolve(&self, raw: &str) -> PathBuf {
        let expanded = if raw == "~" {
            self.home.clone()
        } else if let Some(rest) = raw.strip_prefix("~/") {
            self.home.join(rest)
        } else {
            PathBuf::from(raw)
        };
        if expanded.is_absolute() {
            normalize_path(&expanded)
        } else {
            normalize_path(&self.cwd.join(expanded))
        }
    }
}

// resolve . and .. lexically, .. at root stays at root
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::RootDir | Component::Prefix(_) => out.push(component.as_os_str()),
            Component::Normal(part) => out.push(part),
        }
    }
    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}
