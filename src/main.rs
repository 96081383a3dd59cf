//! # grepedit
//!
//! Pipe `grep` output in, get the last match opened in `$EDITOR`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::process::ExitCode;

use clap::Parser;

use grepedit::{
    cli::Cli,
    commands::{self, Mode, OpenArgs},
    constants::EXIT_FAILURE,
    ui,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        Cli::print_completions(shell);
        return ExitCode::SUCCESS;
    }

    let mode = if cli.print {
        Mode::Print
    } else if cli.dry_run {
        Mode::DryRun
    } else {
        Mode::Launch
    };

    let args = OpenArgs {
        editor: cli.editor,
        mode,
        quiet: cli.quiet,
    };

    match commands::open(&args, std::io::stdin().lock()) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            ui::print_error(&err);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
