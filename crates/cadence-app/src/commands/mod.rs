//! CLI command implementations
//!
//! Each command turns its arguments into the text printed on stdout.

pub mod check;
pub mod done;
pub mod list;
pub mod next;
pub mod task;

use std::io::Read;

use anyhow::{Context, Result};

/// ## Summary
/// Reads command input from `file`, or from stdin when no file is given.
///
/// ## Errors
/// Returns an error if the file or stdin cannot be read.
pub fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
        }
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}
