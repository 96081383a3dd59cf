//! # Open Command
//!
//! Selects the path from piped grep output and opens it in the editor.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#[cfg(not(unix))]
use std::process::ExitStatus;
use std::{io::BufRead, path::Path};

use anyhow::{Context, Result};

#[cfg(not(unix))]
use crate::constants::EXIT_FAILURE;
use crate::{
    editor::{path_bytes, Editor},
    selector::{self, Selection},
    ui,
};

/// What to do with the selected path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Run the editor on the path
    #[default]
    Launch,
    /// Print the path
    Print,
    /// Print the editor command line
    DryRun,
}

/// Arguments for the open command
#[derive(Debug, Clone, Default)]
pub struct OpenArgs {
    /// Editor command; `None` when neither `--editor` nor `$EDITOR` is set
    pub editor: Option<String>,
    pub mode: Mode,
    pub quiet: bool,
}

/// Executes the open command, reading grep output from `input`.
///
/// On Unix, launching replaces this process with the editor and only
/// returns on failure. Otherwise returns the process exit code: the
/// editor's own exit code when it ran, zero for the print modes.
pub fn execute<R: BufRead>(args: &OpenArgs, input: R) -> Result<u8> {
    // Resolve the editor before consuming input so misconfiguration fails fast
    let editor = match args.mode {
        Mode::Print => None,
        Mode::Launch | Mode::DryRun => Some(Editor::parse(args.editor.as_deref())?),
    };

    let selection = selector::select(input).context("Failed to read stdin")?;

    if !args.quiet {
        warn_about(&selection, args.mode);
    }

    let path = selection.path();

    let Some(editor) = editor else {
        ui::print_bytes_line(&path_bytes(path)).context("Failed to write to stdout")?;
        return Ok(0);
    };

    if args.mode == Mode::DryRun {
        ui::print_bytes_line(&editor.display_command(path))
            .context("Failed to write to stdout")?;
        return Ok(0);
    }

    launch(&editor, path)
}

#[cfg(unix)]
#[allow(clippy::unnecessary_wraps)]
fn launch(editor: &Editor, path: &Path) -> Result<u8> {
    Err(editor.exec(path).into())
}

#[cfg(not(unix))]
fn launch(editor: &Editor, path: &Path) -> Result<u8> {
    let status = editor.status(path)?;
    Ok(exit_code(status))
}

fn warn_about(selection: &Selection, mode: Mode) {
    match selection {
        Selection::Empty if mode == Mode::Launch => {
            ui::print_warning("no input on stdin; opening editor with an empty path");
        }
        Selection::Empty => {
            ui::print_warning("no input on stdin; the selected path is empty");
        }
        Selection::Bare(_) => {
            ui::print_warning("no ':' in last line; using the whole line as the path");
        }
        Selection::Match(_) => {}
    }
}

/// Maps the editor's exit status onto our own exit code.
#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> u8 {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(EXIT_FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LaunchError;

    fn args(editor: Option<&str>, mode: Mode) -> OpenArgs {
        OpenArgs {
            editor: editor.map(str::to_string),
            mode,
            quiet: true,
        }
    }

    #[test]
    fn test_print_does_not_need_an_editor() {
        let code = execute(&args(None, Mode::Print), &b"a.rs:1:x\n"[..]).expect("print succeeds");
        assert_eq!(code, 0);
    }

    #[test]
    fn test_launch_without_editor_fails() {
        let err = execute(&args(None, Mode::Launch), &b"a.rs:1:x\n"[..])
            .expect_err("no editor should fail");
        assert!(matches!(
            err.downcast_ref::<LaunchError>(),
            Some(LaunchError::NotConfigured)
        ));
    }

    #[test]
    fn test_dry_run_requires_editor() {
        assert!(execute(&args(Some(" "), Mode::DryRun), &b"a.rs:1:x\n"[..]).is_err());
        assert!(execute(&args(Some("vim"), Mode::DryRun), &b"a.rs:1:x\n"[..]).is_ok());
    }

    #[test]
    fn test_launch_missing_editor_returns_error() {
        let err = execute(
            &args(Some("grepedit-no-such-editor-7f3a"), Mode::Launch),
            &b"a.rs:1:x\n"[..],
        )
        .expect_err("missing editor should fail");
        assert!(matches!(
            err.downcast_ref::<LaunchError>(),
            Some(LaunchError::NotFound { .. })
        ));
    }
}
