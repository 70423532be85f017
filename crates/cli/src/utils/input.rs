use anyhow::{Context, Result};
use std::io::Read;

/// Read a snippet from a file path, or from stdin when `input` is `-`
pub fn read_source(input: &str) -> Result<String> {
    if input == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read snippet from stdin")?;
        return Ok(source);
    }

    std::fs::read_to_string(input).with_context(|| format!("Error reading file: {input}"))
}
