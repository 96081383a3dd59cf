//! # Command Line Interface
//!
//! Argument definitions for `grepedit`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::constants::EDITOR_VAR;

/// Open the file of the last grep match in your editor.
///
/// Reads `grep` output (`path:line:text`) from stdin and opens the path on
/// the last line, e.g. `grep -rn TODO src | grepedit`.
#[derive(Debug, Parser)]
#[command(name = "grepedit", version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Editor command to run (may include arguments, e.g. "code --wait")
    #[arg(short, long, value_name = "CMD", env = EDITOR_VAR, hide_env_values = true)]
    pub editor: Option<String>,

    /// Print the selected path instead of opening it
    #[arg(short, long, conflicts_with = "dry_run")]
    pub print: bool,

    /// Print the editor command line instead of running it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Writes the completion script for `shell` to stdout.
    pub fn print_completions(shell: Shell) {
        let mut cmd = Self::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    }
}
