//! # taxpilot-refdata — Static Reference Tables
//!
//! The classifier's reference data: jurisdiction reporting regimes, exchange
//! reporting flags, risk-factor weights, and per-tier price bands. The
//! built-in tables are code-embedded constants; operators can also supply a
//! complete replacement document in YAML or JSON (for example to add a
//! jurisdiction ahead of a release).
//!
//! All tables are immutable after construction. [`ReferenceData`] validates
//! on load: unique country codes, unique venue and factor ids, positive
//! factor weights, well-formed price bands. Lookups return `Option` — a
//! missing key is a normal condition for the scoring layer, never an error.

pub mod exchanges;
pub mod jurisdictions;
pub mod pricing;
pub mod risk_factors;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use taxpilot_core::{ComplexityLabel, CountryCode, JurisdictionRegime, RefDataError};

pub use exchanges::{builtin_exchanges, ExchangeDescriptor};
pub use jurisdictions::builtin_jurisdictions;
pub use pricing::{PriceRange, PriceTable};
pub use risk_factors::{builtin_risk_factors, RiskFactor};

/// Serialized form of a reference-data document.
///
/// This is the shape of operator-supplied YAML/JSON overrides; the flat
/// lists are re-keyed and validated into a [`ReferenceData`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReferenceDataDoc {
    jurisdictions: Vec<JurisdictionRegime>,
    exchanges: Vec<ExchangeDescriptor>,
    risk_factors: Vec<RiskFactor>,
    pricing: BTreeMap<ComplexityLabel, PriceRange>,
}

/// The aggregate of all four reference tables.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    jurisdictions: BTreeMap<CountryCode, JurisdictionRegime>,
    exchanges: BTreeMap<String, ExchangeDescriptor>,
    risk_factors: BTreeMap<String, RiskFactor>,
    pricing: PriceTable,
}

impl ReferenceData {
    /// The built-in tables shipped with this release.
    pub fn builtin() -> Self {
        // The built-in tables satisfy every integrity check by test; the
        // fallible path is only reachable through operator overrides.
        Self::from_parts(
            builtin_jurisdictions(),
            builtin_exchanges(),
            builtin_risk_factors(),
            PriceTable::builtin(),
        )
        .expect("built-in reference tables are valid")
    }

    /// Assemble and validate reference data from flat tables.
    ///
    /// # Errors
    ///
    /// - [`RefDataError::DuplicateCountry`] for repeated jurisdiction rows.
    /// - [`RefDataError::DuplicateId`] for repeated venue or factor ids.
    /// - [`RefDataError::ZeroWeight`] for a zero-weight risk factor.
    pub fn from_parts(
        jurisdictions: Vec<JurisdictionRegime>,
        exchanges: Vec<ExchangeDescriptor>,
        risk_factors: Vec<RiskFactor>,
        pricing: PriceTable,
    ) -> Result<Self, RefDataError> {
        let mut jmap = BTreeMap::new();
        for row in jurisdictions {
            if jmap.insert(row.country.clone(), row.clone()).is_some() {
                return Err(RefDataError::DuplicateCountry(row.country.to_string()));
            }
        }

        let mut emap = BTreeMap::new();
        for row in exchanges {
            if emap.insert(row.id.clone(), row.clone()).is_some() {
                return Err(RefDataError::DuplicateId {
                    table: "exchange",
                    id: row.id,
                });
            }
        }

        let mut fmap = BTreeMap::new();
        for row in risk_factors {
            if row.weight == 0 {
                return Err(RefDataError::ZeroWeight(row.id));
            }
            if fmap.insert(row.id.clone(), row.clone()).is_some() {
                return Err(RefDataError::DuplicateId {
                    table: "risk factor",
                    id: row.id,
                });
            }
        }

        Ok(Self {
            jurisdictions: jmap,
            exchanges: emap,
            risk_factors: fmap,
            pricing,
        })
    }

    /// Load a full reference-data document from YAML.
    ///
    /// # Errors
    ///
    /// [`RefDataError::Parse`] on malformed YAML, or any structural error
    /// from [`ReferenceData::from_parts`].
    pub fn from_yaml_str(s: &str) -> Result<Self, RefDataError> {
        let doc: ReferenceDataDoc =
            serde_yaml::from_str(s).map_err(|e| RefDataError::Parse(e.to_string()))?;
        Self::from_doc(doc)
    }

    /// Load a full reference-data document from JSON.
    ///
    /// # Errors
    ///
    /// [`RefDataError::Parse`] on malformed JSON, or any structural error
    /// from [`ReferenceData::from_parts`].
    pub fn from_json_str(s: &str) -> Result<Self, RefDataError> {
        let doc: ReferenceDataDoc =
            serde_json::from_str(s).map_err(|e| RefDataError::Parse(e.to_string()))?;
        Self::from_doc(doc)
    }

    fn from_doc(doc: ReferenceDataDoc) -> Result<Self, RefDataError> {
        let pricing = PriceTable::new(doc.pricing)?;
        Self::from_parts(doc.jurisdictions, doc.exchanges, doc.risk_factors, pricing)
    }

    /// Look up the reporting regime for a country.
    pub fn regime_for(&self, country: &CountryCode) -> Option<&JurisdictionRegime> {
        self.jurisdictions.get(country)
    }

    /// Look up a venue by questionnaire slug.
    pub fn exchange(&self, id: &str) -> Option<&ExchangeDescriptor> {
        self.exchanges.get(id)
    }

    /// Look up a risk factor by slug.
    pub fn risk_factor(&self, id: &str) -> Option<&RiskFactor> {
        self.risk_factors.get(id)
    }

    /// The price band for a complexity tier.
    ///
    /// Falls back to [`PriceRange::PriceOnApplication`] if an
    /// operator-supplied table omits the tier.
    pub fn price_for(&self, label: ComplexityLabel) -> PriceRange {
        self.pricing
            .band_for(label)
            .cloned()
            .unwrap_or(PriceRange::PriceOnApplication)
    }

    /// Iterate jurisdiction rows in country order.
    pub fn jurisdictions(&self) -> impl Iterator<Item = &JurisdictionRegime> {
        self.jurisdictions.values()
    }

    /// Iterate venue rows in id order.
    pub fn exchanges(&self) -> impl Iterator<Item = &ExchangeDescriptor> {
        self.exchanges.values()
    }

    /// Iterate risk-factor rows in id order.
    pub fn risk_factors(&self) -> impl Iterator<Item = &RiskFactor> {
        self.risk_factors.values()
    }

    /// The pricing table.
    pub fn pricing(&self) -> &PriceTable {
        &self.pricing
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxpilot_core::RegimeKind;

    #[test]
    fn builtin_loads() {
        let data = ReferenceData::builtin();
        assert!(data.jurisdictions().count() > 40);
        assert!(data.exchanges().count() > 10);
        assert!(data.risk_factors().count() >= 6);
    }

    #[test]
    fn builtin_lookups() {
        let data = ReferenceData::builtin();
        let de = CountryCode::new("DE").unwrap();
        assert_eq!(data.regime_for(&de).unwrap().regime, RegimeKind::Dac8);
        assert!(data.exchange("binance").unwrap().reports_to_authorities);
        assert_eq!(data.risk_factor("unreported").unwrap().weight, 3);
    }

    #[test]
    fn unknown_keys_are_none() {
        let data = ReferenceData::builtin();
        let xx = CountryCode::new("XX").unwrap();
        assert!(data.regime_for(&xx).is_none());
        assert!(data.exchange("hooli_exchange").is_none());
        assert!(data.risk_factor("time_travel").is_none());
    }

    #[test]
    fn price_for_covers_all_tiers() {
        let data = ReferenceData::builtin();
        assert!(matches!(
            data.price_for(ComplexityLabel::Simple),
            PriceRange::Quoted { .. }
        ));
        assert_eq!(
            data.price_for(ComplexityLabel::MultiJurisdictionComplex),
            PriceRange::PriceOnApplication
        );
    }

    #[test]
    fn duplicate_country_rejected() {
        let rows = vec![
            builtin_jurisdictions()[0].clone(),
            builtin_jurisdictions()[0].clone(),
        ];
        let result = ReferenceData::from_parts(
            rows,
            Vec::new(),
            Vec::new(),
            PriceTable::builtin(),
        );
        assert!(matches!(result, Err(RefDataError::DuplicateCountry(_))));
    }

    #[test]
    fn duplicate_exchange_rejected() {
        let rows = vec![
            builtin_exchanges()[0].clone(),
            builtin_exchanges()[0].clone(),
        ];
        let result = ReferenceData::from_parts(
            Vec::new(),
            rows,
            Vec::new(),
            PriceTable::builtin(),
        );
        assert!(matches!(result, Err(RefDataError::DuplicateId { .. })));
    }

    #[test]
    fn zero_weight_factor_rejected() {
        let rows = vec![RiskFactor {
            id: "noop".to_string(),
            weight: 0,
            description: "misconfigured".to_string(),
        }];
        let result = ReferenceData::from_parts(
            Vec::new(),
            Vec::new(),
            rows,
            PriceTable::builtin(),
        );
        assert!(matches!(result, Err(RefDataError::ZeroWeight(_))));
    }

    #[test]
    fn yaml_override_roundtrip() {
        let yaml = r#"
jurisdictions:
  - country: DE
    regime: dac8
    exchange_start: 2026-01-01
  - country: GB
    regime: carf
    exchange_start: 2027-01-01
exchanges:
  - id: binance
    name: Binance
    reports_to_authorities: true
risk_factors:
  - id: unreported
    weight: 3
    description: Unreported gains
pricing:
  simple:
    kind: quoted
    currency: EUR
    low: 500
    high: 900
  multi_jurisdiction_complex:
    kind: price_on_application
"#;
        let data = ReferenceData::from_yaml_str(yaml).unwrap();
        let de = CountryCode::new("DE").unwrap();
        assert_eq!(data.regime_for(&de).unwrap().regime, RegimeKind::Dac8);
        assert_eq!(
            data.price_for(ComplexityLabel::Simple),
            PriceRange::Quoted {
                currency: "EUR".to_string(),
                low: 500,
                high: 900
            }
        );
        // Omitted tier falls back to POA.
        assert_eq!(
            data.price_for(ComplexityLabel::Complex),
            PriceRange::PriceOnApplication
        );
    }

    #[test]
    fn yaml_parse_error_surfaces() {
        assert!(matches!(
            ReferenceData::from_yaml_str(": not yaml ["),
            Err(RefDataError::Parse(_))
        ));
    }

    #[test]
    fn json_override_loads() {
        let json = serde_json::json!({
            "jurisdictions": [],
            "exchanges": [],
            "risk_factors": [],
            "pricing": {}
        })
        .to_string();
        let data = ReferenceData::from_json_str(&json).unwrap();
        assert_eq!(data.jurisdictions().count(), 0);
        assert_eq!(
            data.price_for(ComplexityLabel::Simple),
            PriceRange::PriceOnApplication
        );
    }
}
