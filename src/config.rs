//! Validation policy configuration.
//!
//! This module provides the strongly-typed validation configuration,
//! deserialized from an optional YAML file. The defaults reproduce the
//! strict reference grammar; the alternate policies relax one field each
//! without touching the rest of the session.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

/// Charset policy for employee identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierPolicy {
    /// ASCII letters and digits.
    #[default]
    Alphanumeric,
    /// ASCII digits only.
    Digits,
}

impl IdentifierPolicy {
    /// Human-readable description of the accepted charset, spliced into
    /// the corrective message.
    pub fn expected(self) -> &'static str {
        match self {
            IdentifierPolicy::Alphanumeric => "letters and numbers",
            IdentifierPolicy::Digits => "digits",
        }
    }
}

/// Spacing policy for employee names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameSpacingPolicy {
    /// Single spaces between words only.
    #[default]
    SingleSpaces,
    /// Any arrangement of interior spaces.
    AnySpacing,
}

impl NameSpacingPolicy {
    /// Human-readable description of the accepted shape, spliced into the
    /// corrective message.
    pub fn expected(self) -> &'static str {
        match self {
            NameSpacingPolicy::SingleSpaces => "letters and single spaces between names",
            NameSpacingPolicy::AnySpacing => "letters and spaces only",
        }
    }
}

/// The validation policies in force for one session.
///
/// Every field has a default, so a partial file (or no file at all)
/// yields a working configuration.
///
/// # Example
///
/// ```
/// use payroll_ledger::config::{IdentifierPolicy, NameSpacingPolicy, ValidationConfig};
///
/// let config: ValidationConfig = serde_yaml::from_str("identifier: digits").unwrap();
/// assert_eq!(config.identifier, IdentifierPolicy::Digits);
/// assert_eq!(config.name, NameSpacingPolicy::SingleSpaces);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ValidationConfig {
    /// Charset policy for the identifier field.
    #[serde(default)]
    pub identifier: IdentifierPolicy,
    /// Spacing policy for the name field.
    #[serde(default)]
    pub name: NameSpacingPolicy,
}

impl ValidationConfig {
    /// Loads the configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "payroll.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration on success, or an error if the file
    /// is missing (`ConfigNotFound`) or contains invalid YAML
    /// (`ConfigParseError`).
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path_str = path.as_ref().display().to_string();

        let content = fs::read_to_string(&path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads the configuration if the file exists, falling back to the
    /// defaults when it does not.
    ///
    /// A file that exists but fails to parse is still an error: a present
    /// policy file must never be half-applied.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no policy file, using default validation");
            Ok(Self::default())
        }
    }
}
