//! # User Compliance Profile
//!
//! The ephemeral input record: everything the user has answered so far in
//! the questionnaire. Only the residence country is required — the profile
//! is re-classified live after every answer, so every other field defaults
//! to empty or unknown and the scoring layer treats absence as
//! zero-contribution.
//!
//! Collections are `BTreeSet`s so that profiles have value equality and a
//! deterministic serialized form regardless of answer order.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use taxpilot_core::{AssetCategory, CountryCode, ExchangeCountBucket, TaxYear};

/// A previous country of residence with the move window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousResidence {
    /// The country lived in.
    pub country: CountryCode,
    /// When the user moved there, if they gave a date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_in: Option<NaiveDate>,
    /// When the user moved away, if they gave a date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_out: Option<NaiveDate>,
}

/// Everything the user has self-reported so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserComplianceProfile {
    /// Current country of tax residence. The only required field.
    pub residence_country: CountryCode,

    /// Previous countries of residence, in the order given.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous_countries: Vec<PreviousResidence>,

    /// Categories of assets and income in scope.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub asset_types: BTreeSet<AssetCategory>,

    /// Venue slugs the user ticked. Unknown slugs are tolerated.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub exchanges_used: BTreeSet<String>,

    /// Whether the user has used DeFi protocols; `None` until answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_defi: Option<bool>,

    /// Self-reported venue-count bucket; `None` until answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_count_bucket: Option<ExchangeCountBucket>,

    /// Tax years the engagement would cover.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tax_years_in_scope: BTreeSet<TaxYear>,

    /// Whether the user has filed crypto before; `None` until answered.
    /// Surfaced to callers for messaging, contributes to neither score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filed_crypto_before: Option<bool>,

    /// Risk-factor slugs the user confirmed. Unknown slugs are tolerated.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub activated_risk_factors: BTreeSet<String>,
}

impl UserComplianceProfile {
    /// A profile with only the residence country answered.
    pub fn new(residence_country: CountryCode) -> Self {
        Self {
            residence_country,
            previous_countries: Vec::new(),
            asset_types: BTreeSet::new(),
            exchanges_used: BTreeSet::new(),
            used_defi: None,
            exchange_count_bucket: None,
            tax_years_in_scope: BTreeSet::new(),
            filed_crypto_before: None,
            activated_risk_factors: BTreeSet::new(),
        }
    }

    /// Number of jurisdictions in scope: the current residence plus
    /// distinct previous country codes.
    ///
    /// A previous residence equal to the current one still counts — a
    /// return move means an extra set of filings, not fewer.
    pub fn country_count(&self) -> u32 {
        let distinct_previous: BTreeSet<&CountryCode> = self
            .previous_countries
            .iter()
            .map(|p| &p.country)
            .collect();
        1 + distinct_previous.len() as u32
    }
}
