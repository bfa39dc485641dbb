//! `taxpilot quick` — the consumer quick checker as a one-shot command.
//!
//! Builds a profile from flags instead of a document, mirroring the
//! product's "quick check" form: residence plus any venues and risk
//! factors the user ticks. Unknown venue and factor slugs are accepted
//! and score zero, exactly as in the live questionnaire.

use std::collections::BTreeSet;

use clap::Args;

use taxpilot_classifier::{ComplianceClassifier, PreviousResidence, UserComplianceProfile};
use taxpilot_core::{AssetCategory, CountryCode, ExchangeCountBucket, TaxYear};

use crate::classify::load_refdata;

/// Arguments for `taxpilot quick`.
#[derive(Args, Debug)]
pub struct QuickArgs {
    /// Current country of tax residence (ISO-2 code).
    #[arg(long)]
    pub residence: CountryCode,

    /// Previous country of residence; repeatable.
    #[arg(long = "previous")]
    pub previous: Vec<CountryCode>,

    /// Venue slug the user has traded on; repeatable.
    #[arg(long = "exchange")]
    pub exchanges: Vec<String>,

    /// Risk-factor slug the user confirms; repeatable.
    #[arg(long = "factor")]
    pub factors: Vec<String>,

    /// Asset category in scope; repeatable.
    #[arg(long = "asset")]
    pub assets: Vec<AssetCategory>,

    /// Tax-year label in scope; repeatable.
    #[arg(long = "year")]
    pub years: Vec<String>,

    /// The user confirms DeFi usage.
    #[arg(long)]
    pub defi: bool,

    /// Self-reported venue-count bucket ("1-5", "5-15", "15-30", "30+").
    #[arg(long)]
    pub bucket: Option<ExchangeCountBucket>,

    /// Pretty-print the result.
    #[arg(long)]
    pub pretty: bool,
}

impl QuickArgs {
    /// Assemble the profile the flags describe.
    pub fn to_profile(&self) -> UserComplianceProfile {
        let mut profile = UserComplianceProfile::new(self.residence.clone());
        profile.previous_countries = self
            .previous
            .iter()
            .map(|country| PreviousResidence {
                country: country.clone(),
                moved_in: None,
                moved_out: None,
            })
            .collect();
        profile.exchanges_used = self.exchanges.iter().cloned().collect();
        profile.activated_risk_factors = self.factors.iter().cloned().collect();
        profile.asset_types = self.assets.iter().copied().collect();
        profile.tax_years_in_scope = self
            .years
            .iter()
            .filter_map(|label| match TaxYear::new(label.clone()) {
                Ok(year) => Some(year),
                Err(e) => {
                    tracing::debug!(label = %label, error = %e, "skipping empty year label");
                    None
                }
            })
            .collect::<BTreeSet<_>>();
        profile.used_defi = if self.defi { Some(true) } else { None };
        profile.exchange_count_bucket = self.bucket;
        profile
    }
}

/// Run the `quick` subcommand.
pub fn run_quick(args: &QuickArgs) -> anyhow::Result<u8> {
    let refdata = load_refdata(None)?;
    let profile = args.to_profile();
    let result = ComplianceClassifier::new(&refdata).classify(&profile);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{rendered}");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(residence: &str) -> QuickArgs {
        QuickArgs {
            residence: CountryCode::new(residence).unwrap(),
            previous: Vec::new(),
            exchanges: Vec::new(),
            factors: Vec::new(),
            assets: Vec::new(),
            years: Vec::new(),
            defi: false,
            bucket: None,
            pretty: false,
        }
    }

    #[test]
    fn minimal_args_build_minimal_profile() {
        let profile = args_with("DE").to_profile();
        assert_eq!(profile.residence_country.as_str(), "DE");
        assert_eq!(profile.used_defi, None);
        assert!(profile.exchanges_used.is_empty());
    }

    #[test]
    fn defi_flag_maps_to_confirmed() {
        let mut args = args_with("DE");
        args.defi = true;
        assert_eq!(args.to_profile().used_defi, Some(true));
    }

    #[test]
    fn repeated_flags_collect_into_sets() {
        let mut args = args_with("US");
        args.exchanges = vec!["binance".to_string(), "binance".to_string()];
        args.previous = vec![
            CountryCode::new("GB").unwrap(),
            CountryCode::new("FR").unwrap(),
        ];
        let profile = args.to_profile();
        assert_eq!(profile.exchanges_used.len(), 1);
        assert_eq!(profile.country_count(), 3);
    }

    #[test]
    fn empty_year_labels_skipped() {
        let mut args = args_with("DE");
        args.years = vec!["2024/25".to_string(), "  ".to_string()];
        assert_eq!(args.to_profile().tax_years_in_scope.len(), 1);
    }
}
