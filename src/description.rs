//! Parsed pull-request description model and payload decoding.
//!
//! The payload is a base64-encoded JSON document produced by a markdown
//! converter (either upstream in the pipeline or `prlint convert`). It is
//! decoded once into typed structs here so that the section checks never see
//! untyped JSON.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Deserializer, Serialize};
use std::env::VarError;
use std::fmt;

/// Payload key for the "Description of changes" section
pub const DESCRIPTION_KEY: &str = "Description_of_changes";
/// Payload key for the "GitHub issues resolved by this PR" section
pub const ISSUES_KEY: &str = "GitHub_issues_resolved_by_this_PR";
/// Payload key for the "Quality Assurance" section
pub const QA_KEY: &str = "Quality_Assurance";

/// Errors raised while turning the raw input value into a [`ParsedDescription`].
#[derive(Debug)]
pub enum InputError {
    /// The environment variable holding the payload is not set
    MissingVariable(String),
    /// The payload is not valid base64
    Base64(String),
    /// The decoded bytes are not UTF-8
    Utf8(String),
    /// The JSON does not match the expected description shape
    MalformedInput(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MissingVariable(name) => {
                write!(f, "Environment variable {} is not set", name)
            }
            InputError::Base64(msg) => write!(f, "Payload is not valid base64: {}", msg),
            InputError::Utf8(msg) => write!(f, "Payload is not valid UTF-8: {}", msg),
            InputError::MalformedInput(msg) => write!(f, "Malformed description payload: {}", msg),
        }
    }
}

impl std::error::Error for InputError {}

/// The three template sections of a pull-request description.
///
/// Unknown top-level keys are ignored. A missing key deserializes to a
/// section without `bodies`, which the checks report as `MissingSection`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedDescription {
    #[serde(rename = "Description_of_changes", default)]
    pub description_of_changes: Section,
    #[serde(rename = "GitHub_issues_resolved_by_this_PR", default)]
    pub resolved_issues: Section,
    #[serde(rename = "Quality_Assurance", default)]
    pub quality_assurance: Section,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bodies: Option<Vec<Block>>,
}

/// Discriminator of a parsed markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    List,
    Text,
    Code,
    Quote,
    Rule,
    Html,
    Table,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub raw: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ListItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub checked: bool,
    #[serde(default)]
    pub raw: Option<String>,
}

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ParsedDescription {
    /// Decode a base64-encoded JSON payload.
    pub fn decode(encoded: &str) -> Result<Self, InputError> {
        let bytes = BASE64
            .decode(encoded.trim())
            .map_err(|e| InputError::Base64(e.to_string()))?;
        let json = String::from_utf8(bytes).map_err(|e| InputError::Utf8(e.to_string()))?;
        Self::from_json(&json)
    }

    /// Parse an already-decoded JSON document.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        serde_json::from_str(json).map_err(|e| InputError::MalformedInput(e.to_string()))
    }

    /// Read and decode the payload from an environment variable.
    pub fn from_env(var: &str) -> Result<Self, InputError> {
        let encoded = std::env::var(var).map_err(|e| match e {
            VarError::NotPresent => InputError::MissingVariable(var.to_string()),
            VarError::NotUnicode(_) => {
                InputError::Utf8(format!("environment variable {} is not valid UTF-8", var))
            }
        })?;
        Self::decode(&encoded)
    }
}

impl Section {
    /// Section with the given blocks
    pub fn with_bodies(bodies: Vec<Block>) -> Self {
        Self {
            bodies: Some(bodies),
        }
    }

    /// First block of type `list`, if any
    pub fn first_list(&self) -> Option<&Block> {
        self.bodies
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|b| b.kind == BlockKind::List)
    }

    /// Every item of every list block, in document order
    pub fn list_items(&self) -> impl Iterator<Item = &ListItem> {
        self.bodies
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|b| b.kind == BlockKind::List)
            .flat_map(|b| b.items())
    }
}

impl Block {
    pub fn list(raw: impl Into<String>, items: Vec<ListItem>) -> Self {
        Self {
            kind: BlockKind::List,
            raw: raw.into(),
            items: Some(items),
        }
    }

    pub fn text(raw: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Text,
            raw: raw.into(),
            items: None,
        }
    }

    /// List items, empty for non-list blocks or when `items` is absent
    pub fn items(&self) -> &[ListItem] {
        self.items.as_deref().unwrap_or_default()
    }
}

impl ListItem {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            checked: false,
            raw: Some(raw.into()),
        }
    }

    /// Trimmed raw text, empty when absent
    pub fn text(&self) -> &str {
        self.raw.as_deref().map(str::trim).unwrap_or_default()
    }
}
