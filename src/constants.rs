//! # Constants
//!
//! Shared constants for input parsing and editor launching.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Separator between the path and the rest of a grep output line.
pub const DELIMITER: u8 = b':';

/// Environment variable naming the editor command.
pub const EDITOR_VAR: &str = "EDITOR";

/// Controlling terminal, used as the editor's stdin when stdin is a pipe.
#[cfg(unix)]
pub const TTY_PATH: &str = "/dev/tty";

/// Exit code reported for failures raised by grepedit itself.
pub const EXIT_FAILURE: u8 = 1;
