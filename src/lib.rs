//! # grepedit
//!
//! Opens the file of the last grep match in the user's editor.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod cli;
pub mod commands;
pub mod constants;
pub mod editor;
pub mod error;
pub mod selector;
pub mod ui;
