//! # Tax-Year Labels
//!
//! `TaxYear` wraps the questionnaire's year labels ("2024/25", "2023",
//! "2023/24"). Jurisdictions disagree about what a tax year even is — UK
//! years straddle April, German years are calendar years — so the label is
//! free-form beyond being non-empty. The complexity score only counts them.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

impl<'de> Deserialize<'de> for TaxYear {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A tax-year label as presented in the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TaxYear(String);

impl TaxYear {
    /// Create a tax-year label, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTaxYear`] if the trimmed input is
    /// empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTaxYear);
        }
        Ok(Self(trimmed))
    }

    /// Access the label string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaxYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_year_valid() {
        let y = TaxYear::new("2024/25").unwrap();
        assert_eq!(y.as_str(), "2024/25");
    }

    #[test]
    fn tax_year_rejects_empty() {
        assert!(TaxYear::new("").is_err());
        assert!(TaxYear::new("   ").is_err());
    }

    #[test]
    fn tax_year_trims() {
        let y = TaxYear::new(" 2023 ").unwrap();
        assert_eq!(y.as_str(), "2023");
    }

    #[test]
    fn tax_year_serde_roundtrip() {
        let y = TaxYear::new("2023/24").unwrap();
        let json = serde_json::to_string(&y).unwrap();
        let deser: TaxYear = serde_json::from_str(&json).unwrap();
        assert_eq!(y, deser);
    }

    #[test]
    fn tax_year_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<TaxYear>("\"\"").is_err());
    }

    #[test]
    fn tax_year_ordering_is_stable() {
        let a = TaxYear::new("2022/23").unwrap();
        let b = TaxYear::new("2023/24").unwrap();
        assert!(a < b);
    }
}
