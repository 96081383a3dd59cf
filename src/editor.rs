//! # Editor Integration
//!
//! Launches the user's configured editor on the selected path.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    borrow::Cow,
    io,
    path::Path,
    process::{Command, ExitStatus, Stdio},
};

use crate::error::LaunchError;

/// A parsed editor command: the program plus any arguments of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    program: String,
    args: Vec<String>,
}

impl Editor {
    /// Parses an editor command such as `nvim` or `code --wait`.
    ///
    /// `None` or a blank value means no editor is configured. The value is
    /// split with shell quoting rules (e.g., `nvim -c ":normal G"`).
    pub fn parse(command: Option<&str>) -> Result<Self, LaunchError> {
        let command = command
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or(LaunchError::NotConfigured)?;

        let parts =
            shlex::split(command).ok_or_else(|| LaunchError::InvalidSyntax(command.to_string()))?;
        let (program, args) = parts.split_first().ok_or(LaunchError::NotConfigured)?;

        if program.is_empty() {
            return Err(LaunchError::NotConfigured);
        }

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// The executable that will be spawned.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments that come from the editor command itself, before the path.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Builds the child process: `<program> <args...> <path>`.
    pub fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(path);
        cmd
    }

    /// Shell-quoted command line, as printed by `--dry-run`.
    ///
    /// Returned as bytes so a non-UTF-8 path is reproduced exactly.
    pub fn display_command(&self, path: &Path) -> Vec<u8> {
        let path = path_bytes(path);
        let words: Vec<Cow<'_, [u8]>> = std::iter::once(self.program.as_bytes())
            .chain(self.args.iter().map(String::as_bytes))
            .chain(std::iter::once(&*path))
            .map(quote)
            .collect();
        words.join(&b' ')
    }

    /// Runs the editor on `path` as a child process and waits for it to exit.
    ///
    /// Output streams are inherited. When stdin is a pipe (the usual case,
    /// since grep output arrives on it) the editor reads from the
    /// controlling terminal instead, if there is one.
    pub fn status(&self, path: &Path) -> Result<ExitStatus, LaunchError> {
        let mut cmd = self.command(path);
        cmd.stdin(terminal_stdin());
        cmd.status().map_err(|source| self.launch_error(source))
    }

    /// Replaces the current process with the editor.
    ///
    /// The editor inherits our process group and terminal, so interrupts
    /// reach it alone and its exit status becomes ours. Only returns if the
    /// editor could not be started.
    #[cfg(unix)]
    pub fn exec(&self, path: &Path) -> LaunchError {
        use std::os::unix::process::CommandExt;

        let mut cmd = self.command(path);
        cmd.stdin(terminal_stdin());
        self.launch_error(cmd.exec())
    }

    fn launch_error(&self, source: io::Error) -> LaunchError {
        match source.kind() {
            io::ErrorKind::NotFound => LaunchError::NotFound {
                program: self.program.clone(),
            },
            _ => LaunchError::Spawn {
                editor: self.program.clone(),
                source,
            },
        }
    }
}

fn quote(word: &[u8]) -> Cow<'_, [u8]> {
    // Only fails on NUL bytes, which cannot be passed to a process anyway
    shlex::bytes::try_quote(word).unwrap_or(Cow::Borrowed(word))
}

/// Raw bytes of `path`; lossy outside Unix.
#[cfg(unix)]
pub fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;

    Cow::Borrowed(path.as_os_str().as_bytes())
}

/// Raw bytes of `path`; lossy outside Unix.
#[cfg(not(unix))]
pub fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

#[cfg(unix)]
fn terminal_stdin() -> Stdio {
    use std::{fs::File, io::IsTerminal};

    use crate::constants::TTY_PATH;

    if io::stdin().is_terminal() {
        return Stdio::inherit();
    }

    File::open(TTY_PATH).map_or_else(|_| Stdio::inherit(), Stdio::from)
}

#[cfg(not(unix))]
fn terminal_stdin() -> Stdio {
    Stdio::inherit()
}
