pub mod catalog;
pub mod config;
pub mod documents;
pub mod group;
pub mod response;

use anyhow::{Context, Result};
use std::io::Read;

/// Read a whole input, `-` meaning stdin
pub(crate) fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(content);
    }

    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
}
