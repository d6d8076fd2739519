//! `prlint convert`: turn a markdown PR body into the check payload.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::fs;
use std::io::{self, Read};

use prlint::markdown;

/// Convert markdown from a file (or stdin for `-`) and print it as JSON or base64.
pub fn cmd_convert(input: &str, base64: bool) -> Result<()> {
    let content = read_input(input)?;
    println!("{}", convert(&content, base64)?);
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read markdown from stdin")?;
        return Ok(buffer);
    }

    fs::read_to_string(input).with_context(|| format!("Failed to read markdown from {}", input))
}

fn convert(markdown: &str, base64: bool) -> Result<String> {
    let sections = markdown::to_sections(markdown);

    if base64 {
        let json = serde_json::to_string(&sections).context("Failed to serialize sections")?;
        Ok(BASE64.encode(json))
    } else {
        serde_json::to_string_pretty(&sections).context("Failed to serialize sections")
    }
}
