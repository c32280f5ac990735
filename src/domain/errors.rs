//! Error types surfaced to the user when a profile cannot be generated.

use crate::domain::entities::ConfigKey;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for profile generation.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The `.env` file is missing or unreadable.
    #[error("ERROR: .env file '{}' not found or unreadable ({source})", .path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// The `.env` file exists but a line in it is not a valid assignment.
    #[error(
        "ERROR: .env file '{}' could not be parsed near '{line}' (column {index}); values containing spaces must be quoted, e.g. KEY=\"Work Mail\"",
        .path.display()
    )]
    ConfigParse {
        path: PathBuf,
        line: String,
        index: usize,
    },

    /// One or more required variables are missing or malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The profile was rendered but could not be written to disk.
    #[error("ERROR: failed to write profile '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The XML serializer failed.
    #[error("ERROR: failed to render profile: {0}")]
    Render(String),
}

/// A variable that was present but could not be coerced to its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedField {
    pub key: ConfigKey,
    pub value: String,
    pub reason: String,
}

/// Every problem found while validating the configuration, collected in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    missing: Vec<ConfigKey>,
    malformed: Vec<MalformedField>,
}

impl ValidationError {
    pub fn push_missing(&mut self, key: ConfigKey) {
        self.missing.push(key);
    }

    pub fn push_malformed(&mut self, key: ConfigKey, value: &str, reason: String) {
        self.malformed.push(MalformedField {
            key,
            value: value.to_string(),
            reason,
        });
    }

    pub fn missing(&self) -> &[ConfigKey] {
        &self.missing
    }

    pub fn malformed(&self) -> &[MalformedField] {
        &self.malformed
    }

    /// All offending keys, missing first, then malformed
    pub fn fields(&self) -> Vec<ConfigKey> {
        self.missing
            .iter()
            .copied()
            .chain(self.malformed.iter().map(|m| m.key))
            .collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sections = Vec::new();
        if !self.missing().is_empty() {
            let names: Vec<&str> = self.missing().iter().map(ConfigKey::as_str).collect();
            sections.push(format!(
                "Missing required variables in .env: {}",
                names.join(", ")
            ));
        }
        if !self.malformed().is_empty() {
            let details: Vec<String> = self
                .malformed()
                .iter()
                .map(|m| format!("{}='{}' ({})", m.key, m.value, m.reason))
                .collect();
            sections.push(format!("Invalid values in .env: {}", details.join(", ")));
        }
        write!(f, "ERROR: {}", sections.join("; "))
    }
}

impl std::error::Error for ValidationError {}
