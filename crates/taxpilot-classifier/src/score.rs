//! # Scoring
//!
//! The two additive scores computed from a profile. Both are pure functions
//! over the profile and the reference tables.
//!
//! - **Risk score**: jurisdiction regime + reporting-venue exposure +
//!   self-reported factors. Drives the risk-level messaging.
//! - **Complexity score**: country/asset/year counts with DeFi and
//!   many-venue surcharges. Drives the pricing tier only.
//!
//! Every contribution is optional and independent: anything missing,
//! unknown, or unanswered contributes zero. Unknown slugs are skipped with
//! a debug log so an operator can spot questionnaire/refdata drift, but
//! they are never an error.

use serde::{Deserialize, Serialize};

use taxpilot_refdata::ReferenceData;

use crate::profile::UserComplianceProfile;

/// Surcharge when the user confirms DeFi usage.
const DEFI_COMPLEXITY_SURCHARGE: u32 = 3;

/// Surcharge when the self-reported venue-count bucket is 15-30 or 30+.
const MANY_VENUES_COMPLEXITY_SURCHARGE: u32 = 2;

/// The per-source contributions that sum to the risk score.
///
/// Surfaced alongside the score so callers can explain the result
/// ("your residence country shares data under DAC8", "3 of your venues
/// report to tax authorities").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    /// Contribution of the residence country's reporting regime.
    pub jurisdiction: u32,
    /// Contribution from reporting venues the user has used.
    pub exchanges: u32,
    /// Number of the user's venues that report to authorities.
    pub reporting_exchange_count: u32,
    /// Summed weights of recognized activated risk factors.
    pub factors: u32,
}

impl RiskBreakdown {
    /// The total risk score.
    pub fn total(&self) -> u32 {
        self.jurisdiction + self.exchanges + self.factors
    }
}

/// Compute the risk score and its per-source breakdown.
pub fn risk_score(profile: &UserComplianceProfile, refdata: &ReferenceData) -> RiskBreakdown {
    let jurisdiction = match refdata.regime_for(&profile.residence_country) {
        Some(record) => record.regime.risk_weight(),
        None => {
            tracing::debug!(
                country = %profile.residence_country,
                "no regime entry for residence country; contributes 0"
            );
            0
        }
    };

    let reporting_exchange_count = profile
        .exchanges_used
        .iter()
        .filter(|id| match refdata.exchange(id.as_str()) {
            Some(venue) => venue.reports_to_authorities,
            None => {
                tracing::debug!(venue = %id, "unknown venue slug ignored");
                false
            }
        })
        .count() as u32;

    let exchanges = match reporting_exchange_count {
        0 => 0,
        1..=2 => 1,
        _ => 2,
    };

    let factors = profile
        .activated_risk_factors
        .iter()
        .filter_map(|id| match refdata.risk_factor(id.as_str()) {
            Some(factor) => Some(factor.weight),
            None => {
                tracing::debug!(factor = %id, "unknown risk factor ignored");
                None
            }
        })
        .sum();

    RiskBreakdown {
        jurisdiction,
        exchanges,
        reporting_exchange_count,
        factors,
    }
}

/// Compute the complexity score.
///
/// `country_count x 2 + asset categories + tax years`, plus surcharges for
/// confirmed DeFi usage and a high venue-count bucket. Distinct from the
/// risk score by design: a perfectly compliant profile can still be
/// expensive to prepare.
pub fn complexity_score(profile: &UserComplianceProfile) -> u32 {
    let base = profile.country_count() * 2
        + profile.asset_types.len() as u32
        + profile.tax_years_in_scope.len() as u32;

    let defi = if profile.used_defi == Some(true) {
        DEFI_COMPLEXITY_SURCHARGE
    } else {
        0
    };

    let many_venues = match profile.exchange_count_bucket {
        Some(bucket) if bucket.is_many() => MANY_VENUES_COMPLEXITY_SURCHARGE,
        _ => 0,
    };

    base + defi + many_venues
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;
    use taxpilot_core::{AssetCategory, CountryCode, ExchangeCountBucket, TaxYear};

    fn profile(code: &str) -> UserComplianceProfile {
        UserComplianceProfile::new(CountryCode::new(code).unwrap())
    }

    fn refdata() -> ReferenceData {
        ReferenceData::builtin()
    }

    #[test]
    fn empty_profile_scores_only_jurisdiction() {
        let breakdown = risk_score(&profile("GB"), &refdata());
        assert_eq!(breakdown.jurisdiction, 2);
        assert_eq!(breakdown.exchanges, 0);
        assert_eq!(breakdown.factors, 0);
        assert_eq!(breakdown.total(), 2);
    }

    #[test]
    fn unknown_residence_contributes_zero() {
        let breakdown = risk_score(&profile("XX"), &refdata());
        assert_eq!(breakdown.jurisdiction, 0);
        assert_eq!(breakdown.total(), 0);
    }

    #[test]
    fn dac8_residence_contributes_three() {
        let breakdown = risk_score(&profile("DE"), &refdata());
        assert_eq!(breakdown.jurisdiction, 3);
    }

    #[test]
    fn single_reporting_exchange_adds_one() {
        let mut p = profile("US");
        p.exchanges_used = BTreeSet::from(["kraken".to_string()]);
        let breakdown = risk_score(&p, &refdata());
        assert_eq!(breakdown.reporting_exchange_count, 1);
        assert_eq!(breakdown.exchanges, 1);
    }

    #[test]
    fn two_reporting_exchanges_still_add_one() {
        let mut p = profile("US");
        p.exchanges_used = BTreeSet::from(["kraken".to_string(), "coinbase".to_string()]);
        let breakdown = risk_score(&p, &refdata());
        assert_eq!(breakdown.exchanges, 1);
    }

    #[test]
    fn three_reporting_exchanges_add_two() {
        let mut p = profile("US");
        p.exchanges_used = BTreeSet::from([
            "kraken".to_string(),
            "coinbase".to_string(),
            "binance".to_string(),
        ]);
        let breakdown = risk_score(&p, &refdata());
        assert_eq!(breakdown.reporting_exchange_count, 3);
        assert_eq!(breakdown.exchanges, 2);
    }

    #[test]
    fn non_reporting_and_unknown_venues_do_not_count() {
        let mut p = profile("US");
        p.exchanges_used = BTreeSet::from([
            "mexc".to_string(),           // known, non-reporting
            "garage_exchange".to_string(), // unknown
        ]);
        let breakdown = risk_score(&p, &refdata());
        assert_eq!(breakdown.reporting_exchange_count, 0);
        assert_eq!(breakdown.exchanges, 0);
    }

    #[test]
    fn unknown_factors_ignored() {
        let mut p = profile("US");
        p.activated_risk_factors =
            BTreeSet::from(["unreported".to_string(), "alchemy".to_string()]);
        let breakdown = risk_score(&p, &refdata());
        assert_eq!(breakdown.factors, 3);
    }

    #[test]
    fn factor_weights_sum() {
        let mut p = profile("US");
        p.activated_risk_factors = BTreeSet::from([
            "unreported".to_string(),
            "defi".to_string(),
            "mining".to_string(),
        ]);
        let breakdown = risk_score(&p, &refdata());
        assert_eq!(breakdown.factors, 3 + 2 + 1);
    }

    #[test]
    fn complexity_minimal_profile() {
        // One country, nothing else answered: 1 x 2.
        assert_eq!(complexity_score(&profile("DE")), 2);
    }

    #[test]
    fn complexity_counts_assets_and_years() {
        let mut p = profile("DE");
        p.asset_types = BTreeSet::from([AssetCategory::Crypto, AssetCategory::Rental]);
        p.tax_years_in_scope = BTreeSet::from([
            TaxYear::new("2023/24").unwrap(),
            TaxYear::new("2024/25").unwrap(),
        ]);
        assert_eq!(complexity_score(&p), 2 + 2 + 2);
    }

    #[test]
    fn defi_surcharge_only_when_confirmed() {
        let mut p = profile("DE");
        p.used_defi = Some(false);
        assert_eq!(complexity_score(&p), 2);
        p.used_defi = None;
        assert_eq!(complexity_score(&p), 2);
        p.used_defi = Some(true);
        assert_eq!(complexity_score(&p), 5);
    }

    #[test]
    fn many_venue_buckets_add_two() {
        let mut p = profile("DE");
        p.exchange_count_bucket = Some(ExchangeCountBucket::FiveToFifteen);
        assert_eq!(complexity_score(&p), 2);
        p.exchange_count_bucket = Some(ExchangeCountBucket::FifteenToThirty);
        assert_eq!(complexity_score(&p), 4);
        p.exchange_count_bucket = Some(ExchangeCountBucket::ThirtyPlus);
        assert_eq!(complexity_score(&p), 4);
    }

    proptest! {
        // Adding a recognized factor never decreases the risk score.
        #[test]
        fn risk_score_monotone_in_factors(extra in prop::sample::select(vec![
            "unreported", "defi", "no_records", "mining", "staking", "nft_trading",
        ])) {
            let data = refdata();
            let mut p = profile("DE");
            p.activated_risk_factors = BTreeSet::from(["staking".to_string()]);
            let before = risk_score(&p, &data).total();
            p.activated_risk_factors.insert(extra.to_string());
            let after = risk_score(&p, &data).total();
            prop_assert!(after >= before);
        }

        // Scoring is deterministic: same profile, same result.
        #[test]
        fn risk_score_deterministic(
            code in "[A-Z]{2}",
            venues in prop::collection::btree_set(
                prop::sample::select(vec!["binance", "kraken", "mexc", "nowhere"]),
                0..4,
            ),
        ) {
            let data = refdata();
            let mut p = profile(&code);
            p.exchanges_used = venues.into_iter().map(String::from).collect();
            let a = risk_score(&p, &data);
            let b = risk_score(&p, &data);
            prop_assert_eq!(a, b);
        }
    }
}
