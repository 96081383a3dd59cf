//! # Line Selector
//!
//! Picks the last line of grep-style input and extracts its path.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    ffi::OsString,
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use crate::constants::DELIMITER;

/// The path chosen from the input, and how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Input had no lines; the path is empty.
    Empty,
    /// Last line contained the delimiter; path is the text before it.
    Match(PathBuf),
    /// Last line had no delimiter; path is the whole line.
    Bare(PathBuf),
}

impl Selection {
    /// Returns the selected path (empty for [`Selection::Empty`]).
    pub fn path(&self) -> &Path {
        match self {
            Self::Empty => Path::new(""),
            Self::Match(path) | Self::Bare(path) => path,
        }
    }
}

/// Reads the whole stream and returns its final line without the line ending.
///
/// A trailing newline terminates the last line rather than starting an empty
/// one. Returns `None` when the stream is empty.
pub fn last_line<R: BufRead>(mut reader: R) -> io::Result<Option<Vec<u8>>> {
    let mut last = None;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        last = Some(std::mem::take(&mut buf));
    }

    Ok(last.map(|mut line| {
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        line
    }))
}

/// Returns the part of `line` before the first delimiter, or all of it.
pub fn path_of(line: &[u8]) -> &[u8] {
    line.iter()
        .position(|&b| b == DELIMITER)
        .map_or(line, |end| &line[..end])
}

/// Consumes `reader` and selects the path from its last line.
pub fn select<R: BufRead>(reader: R) -> io::Result<Selection> {
    let Some(line) = last_line(reader)? else {
        return Ok(Selection::Empty);
    };

    let path = path_of(&line);
    let has_delimiter = path.len() < line.len();
    let path = bytes_to_path(path.to_vec());

    Ok(if has_delimiter {
        Selection::Match(path)
    } else {
        Selection::Bare(path)
    })
}

#[cfg(unix)]
fn bytes_to_path(bytes: Vec<u8>) -> PathBuf {
    use std::os::unix::ffi::OsStringExt;

    PathBuf::from(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(OsString::from(
        String::from_utf8_lossy(&bytes).into_owned(),
    ))
}
