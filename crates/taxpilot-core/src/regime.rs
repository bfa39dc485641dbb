//! # Reporting Regimes — Single Source of Truth
//!
//! Defines `RegimeKind`, the cross-border crypto data-sharing framework that
//! applies to a jurisdiction, and `JurisdictionRegime`, the per-country
//! record in the reference table.
//!
//! A single enum keeps the regime taxonomy in one place: every `match` on
//! `RegimeKind` is exhaustive, so adding a framework (say, a successor to
//! CARF) forces every consumer — scoring, pricing, CLI output — to handle it
//! at compile time.
//!
//! # Regimes
//!
//! | Kind | Framework | Reference-data semantics |
//! |------|-----------|--------------------------|
//! | `None` | no cross-border exchange | no effective date |
//! | `Carf` | OECD Crypto-Asset Reporting Framework | future effective date (2027 wave) |
//! | `Dac8` | EU DAC8 directive | already active (from 2026-01-01) |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::country::CountryCode;
use crate::error::ValidationError;

/// The cross-border crypto tax-data exchange framework for a jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegimeKind {
    /// No automatic exchange framework is modeled for this country.
    None,
    /// OECD Crypto-Asset Reporting Framework (first exchanges in 2027).
    Carf,
    /// EU DAC8 directive (reporting active since January 2026).
    Dac8,
}

impl RegimeKind {
    /// Returns all regime kinds in canonical order.
    pub fn all() -> &'static [RegimeKind] {
        &[Self::None, Self::Carf, Self::Dac8]
    }

    /// Returns the snake_case string identifier for this regime.
    ///
    /// Must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Carf => "carf",
            Self::Dac8 => "dac8",
        }
    }

    /// Contribution of this regime to the risk score.
    ///
    /// DAC8 is already in force, so residence under it weighs heavier than
    /// CARF's future start. Countries with no framework contribute nothing.
    pub fn risk_weight(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::Carf => 2,
            Self::Dac8 => 3,
        }
    }
}

impl std::fmt::Display for RegimeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegimeKind {
    type Err = ValidationError;

    /// Parse a regime kind from its snake_case string identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "carf" => Ok(Self::Carf),
            "dac8" => Ok(Self::Dac8),
            other => Err(ValidationError::UnknownIdentifier {
                kind: "regime",
                value: other.to_string(),
            }),
        }
    }
}

/// One row of the jurisdiction-regime reference table.
///
/// Exactly one record exists per country code in a valid table; the
/// aggregate loader enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionRegime {
    /// The country this record describes.
    pub country: CountryCode,
    /// Which exchange framework applies.
    pub regime: RegimeKind,
    /// When data-sharing with tax authorities begins or began.
    ///
    /// `None` regimes carry no date. DAC8 dates are in the past relative to
    /// the product's reference data; CARF dates are in the future.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_start: Option<NaiveDate>,
}

impl JurisdictionRegime {
    /// Whether automatic data exchange is already in force on `as_of`.
    pub fn active_on(&self, as_of: NaiveDate) -> bool {
        match self.exchange_start {
            Some(start) => start <= as_of,
            None => false,
        }
    }
}
