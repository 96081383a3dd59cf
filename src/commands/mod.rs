//! # Commands
//!
//! Command implementations behind the `grepedit` binary.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod open;

pub use open::{execute as open, Mode, OpenArgs};
