//! # Country Code Newtype
//!
//! `CountryCode` is the validated ISO 3166-1 alpha-2 identifier used to key
//! the jurisdiction-regime table and to record residence history.
//!
//! ## Validation
//!
//! Exactly two ASCII letters, normalized to uppercase at construction.
//! Deserialization goes through the same validating constructor, so a
//! `CountryCode` obtained from JSON or YAML carries the same guarantee as
//! one built in code.
//!
//! Note that validation is about *format*, not membership: "XX" is a valid
//! `CountryCode` that simply has no entry in the regime table. The scoring
//! layer treats unknown-but-well-formed codes as zero-contribution.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// An ISO 3166-1 alpha-2 country code, uppercase by construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code from a string, validating the two-letter format.
    ///
    /// Lowercase input is accepted and normalized to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCountryCode`] if the trimmed input
    /// is not exactly two ASCII letters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCountryCode(raw));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Access the country code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
