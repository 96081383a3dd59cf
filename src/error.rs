//! # Errors
//!
//! Failures raised while resolving and launching the editor.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io;

use thiserror::Error;

/// Error returned when the editor cannot be resolved or started.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no editor configured; set $EDITOR or pass --editor")]
    NotConfigured,

    #[error("invalid editor command syntax: {0}")]
    InvalidSyntax(String),

    #[error("{program}: command not found")]
    NotFound { program: String },

    #[error("failed to launch editor: {editor}")]
    Spawn {
        editor: String,
        #[source]
        source: io::Error,
    },
}
