//! # UI Utilities
//!
//! Diagnostic output on stderr and raw path output on stdout.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fmt::Display,
    io::{self, Write},
};

use owo_colors::{OwoColorize, Stream, Style};

/// Prints a warning with yellow prefix.
///
/// Colour is only used when stderr supports it.
pub fn print_warning(warning: impl Display) {
    eprintln!(
        "{} {}",
        "warning:".if_supports_color(Stream::Stderr, |text| text.yellow()),
        warning
    );
}

/// Prints an error and its causes with red prefix.
///
/// Format: `error: {message}: {cause}: ...`
pub fn print_error(err: &anyhow::Error) {
    eprintln!(
        "{} {:#}",
        "error:".if_supports_color(Stream::Stderr, |text| {
            text.style(Style::new().red().bold())
        }),
        err
    );
}

/// Writes `bytes` followed by a newline to stdout, unmodified.
pub fn print_bytes_line(bytes: &[u8]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(bytes)?;
    stdout.write_all(b"\n")?;
    stdout.flush()
}
