//! Core type definitions shared across modules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a block of input text is turned into references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMode {
    /// Free reference text: split on newline, comma and semicolon, then
    /// parse each piece with the reference grammar.
    #[default]
    References,
    /// A plain list, one reference per line: each line is whitespace-
    /// normalized and kept verbatim, without grammar matching.
    PlainList,
}

impl InputMode {
    /// Returns the human-readable name of this mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::References => "references",
            Self::PlainList => "plain list",
        }
    }
}

/// Saved record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
