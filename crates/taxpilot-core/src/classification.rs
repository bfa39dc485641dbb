//! # Classification Labels
//!
//! The two output taxonomies of the classifier: `RiskLevel` (messaging) and
//! `ComplexityLabel` (pricing tier). The enums live here so that reference
//! data (price bands are keyed by tier) and the scoring layer share one
//! definition; the threshold functions that *produce* them belong to the
//! classifier crate.
//!
//! Both enums carry a numeric `severity()`/`rank()` used only for ordering —
//! higher means more severe / more complex.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// The risk tier shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// No meaningful exposure identified.
    Low,
    /// Some exposure; worth reviewing.
    Medium,
    /// Material exposure; professional review recommended.
    High,
    /// Severe exposure; immediate action recommended.
    Critical,
}

impl RiskLevel {
    /// Returns all levels from least to most severe.
    pub fn all() -> &'static [RiskLevel] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }

    /// Ordering value; higher is more severe.
    fn severity(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
            Self::Critical => 3,
        }
    }

    /// Returns the snake_case string identifier for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl PartialOrd for RiskLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RiskLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.severity().cmp(&other.severity())
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(ValidationError::UnknownIdentifier {
                kind: "risk level",
                value: other.to_string(),
            }),
        }
    }
}

/// The pricing tier derived from the complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLabel {
    /// Single jurisdiction, few assets and years.
    Simple,
    /// Some breadth of assets or years.
    Moderate,
    /// Heavy profile within one jurisdiction, or a lighter multi-country one.
    Complex,
    /// Multiple jurisdictions with a heavy profile; priced on application.
    MultiJurisdictionComplex,
}

impl ComplexityLabel {
    /// Returns all tiers from simplest to most complex.
    pub fn all() -> &'static [ComplexityLabel] {
        &[
            Self::Simple,
            Self::Moderate,
            Self::Complex,
            Self::MultiJurisdictionComplex,
        ]
    }

    /// Ordering value; higher is more complex.
    fn rank(self) -> u8 {
        match self {
            Self::Simple => 0,
            Self::Moderate => 1,
            Self::Complex => 2,
            Self::MultiJurisdictionComplex => 3,
        }
    }

    /// Returns the snake_case string identifier for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
            Self::MultiJurisdictionComplex => "multi_jurisdiction_complex",
        }
    }
}

impl PartialOrd for ComplexityLabel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComplexityLabel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for ComplexityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplexityLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Self::Simple),
            "moderate" => Ok(Self::Moderate),
            "complex" => Ok(Self::Complex),
            "multi_jurisdiction_complex" => Ok(Self::MultiJurisdictionComplex),
            other => Err(ValidationError::UnknownIdentifier {
                kind: "complexity label",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_levels_ordered_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn complexity_labels_ordered_by_rank() {
        assert!(ComplexityLabel::Simple < ComplexityLabel::Moderate);
        assert!(ComplexityLabel::Complex < ComplexityLabel::MultiJurisdictionComplex);
    }

    #[test]
    fn risk_level_as_str_roundtrip() {
        for level in RiskLevel::all() {
            let parsed: RiskLevel = level.as_str().parse().unwrap();
            assert_eq!(*level, parsed);
        }
    }

    #[test]
    fn complexity_label_as_str_roundtrip() {
        for label in ComplexityLabel::all() {
            let parsed: ComplexityLabel = label.as_str().parse().unwrap();
            assert_eq!(*label, parsed);
        }
    }

    #[test]
    fn serde_format_matches_as_str() {
        for level in RiskLevel::all() {
            let json = serde_json::to_string(level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
        for label in ComplexityLabel::all() {
            let json = serde_json::to_string(label).unwrap();
            assert_eq!(json, format!("\"{}\"", label.as_str()));
        }
    }

    #[test]
    fn from_str_invalid() {
        assert!("LOW".parse::<RiskLevel>().is_err());
        assert!("multi".parse::<ComplexityLabel>().is_err());
    }
}
