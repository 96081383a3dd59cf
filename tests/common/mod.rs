//! # Test Harness
//!
//! Shared helpers for running the `grepedit` binary against a fake editor.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Scratch directory holding a recording fake editor.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Path of the file the fake editor appends its invocations to.
    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("editor.log")
    }

    /// Writes an executable shell script that records `$#|$1` per run
    /// and exits with `exit_code`.
    #[cfg(unix)]
    pub fn fake_editor(&self, exit_code: i32) -> PathBuf {
        self.editor_script(&format!(
            "printf '%s|%s\\n' \"$#\" \"$1\" >> '{}'\nexit {exit_code}\n",
            self.log_path().display()
        ))
    }

    /// Writes an executable `/bin/sh` script with the given body.
    #[cfg(unix)]
    pub fn editor_script(&self, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join("fake-editor");
        fs::write(&path, format!("#!/bin/sh\n{body}")).expect("failed to write fake editor");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("failed to make fake editor executable");
        path
    }

    /// Invocations recorded by the fake editor, one `argc|first-arg` per line.
    pub fn invocations(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Creates a file inside the scratch directory and returns its path.
    pub fn create_file(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, "content\n").expect("failed to write file");
        path
    }
}

/// The `grepedit` binary with `$EDITOR` and colour overrides cleared.
pub fn grepedit() -> Command {
    Command::from_std(grepedit_std())
}

/// Same as [`grepedit`], as a plain `std::process::Command` for tests that
/// need process-level settings.
pub fn grepedit_std() -> std::process::Command {
    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin("grepedit"));
    cmd.env_remove("EDITOR")
        .env_remove("FORCE_COLOR")
        .env_remove("CLICOLOR_FORCE");
    cmd
}
