//! Project configuration for prlint.
//!
//! Configuration lives in a markdown file with YAML frontmatter, by default
//! `.prlint/config.md`. Every field is optional.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::checks::{Rules, DEFAULT_MIN_CHANGE_LENGTH, DEFAULT_QA_PLACEHOLDER};

/// Default location of the project config file
pub const DEFAULT_CONFIG_PATH: &str = ".prlint/config.md";

/// Environment variable read by `prlint check` when none is configured
pub const DEFAULT_INPUT_ENV: &str = "PR_DESCRIPTION";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Environment variable holding the base64 payload
    #[serde(default = "default_input_env")]
    pub input_env: String,
    /// Change entries must be longer than this many characters
    #[serde(default = "default_min_change_length")]
    pub min_change_length: usize,
    /// Unedited first line of the QA checklist
    #[serde(default = "default_qa_placeholder")]
    pub qa_placeholder: String,
}

fn default_input_env() -> String {
    DEFAULT_INPUT_ENV.to_string()
}

fn default_min_change_length() -> usize {
    DEFAULT_MIN_CHANGE_LENGTH
}

fn default_qa_placeholder() -> String {
    DEFAULT_QA_PLACEHOLDER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_env: default_input_env(),
            min_change_length: default_min_change_length(),
            qa_placeholder: default_qa_placeholder(),
        }
    }
}

impl Config {
    /// Load `.prlint/config.md` if present, defaults otherwise.
    pub fn load() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load from an explicit path; the file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let frontmatter =
            extract_frontmatter(content).context("Failed to extract frontmatter from config")?;

        // An empty frontmatter block is valid and means all defaults
        if frontmatter.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Thresholds for the section checks
    pub fn rules(&self) -> Rules {
        Rules {
            min_change_length: self.min_change_length,
            qa_placeholder: self.qa_placeholder.clone(),
        }
    }
}

fn extract_frontmatter(content: &str) -> Option<String> {
    let content = content.trim();

    if !content.starts_with("---") {
        return None;
    }

    let rest = &content[3..];
    rest.find("---").map(|end| rest[..end].to_string())
}
