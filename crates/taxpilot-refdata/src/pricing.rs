//! # Price Bands
//!
//! The per-tier price bands used for quoting. These are literal lookup
//! values, a deliberate step function for sales purposes — they are never
//! interpolated from the score. The top tier is priced on application
//! rather than quoted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use taxpilot_core::{ComplexityLabel, RefDataError};

/// An estimated price for a complexity tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceRange {
    /// A quoted band in a single currency.
    Quoted {
        /// ISO 4217 currency code.
        currency: String,
        /// Lower bound, whole currency units.
        low: u32,
        /// Upper bound, whole currency units.
        high: u32,
    },
    /// No quoted band; the engagement is scoped and priced individually.
    PriceOnApplication,
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quoted { currency, low, high } => write!(f, "{currency} {low}-{high}"),
            Self::PriceOnApplication => f.write_str("price on application"),
        }
    }
}

/// The per-tier pricing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    bands: BTreeMap<ComplexityLabel, PriceRange>,
}

impl PriceTable {
    /// Build a table from per-tier bands, validating quoted bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RefDataError::InvertedPriceBand`] if any quoted band has
    /// `low > high`.
    pub fn new(bands: BTreeMap<ComplexityLabel, PriceRange>) -> Result<Self, RefDataError> {
        for (label, band) in &bands {
            if let PriceRange::Quoted { low, high, .. } = band {
                if low > high {
                    return Err(RefDataError::InvertedPriceBand {
                        label: label.as_str().to_string(),
                        low: *low,
                        high: *high,
                    });
                }
            }
        }
        Ok(Self { bands })
    }

    /// The built-in pricing table.
    pub fn builtin() -> Self {
        let quoted = |low, high| PriceRange::Quoted {
            currency: "EUR".to_string(),
            low,
            high,
        };
        let bands = BTreeMap::from([
            (ComplexityLabel::Simple, quoted(450, 750)),
            (ComplexityLabel::Moderate, quoted(750, 1_500)),
            (ComplexityLabel::Complex, quoted(1_500, 3_500)),
            (
                ComplexityLabel::MultiJurisdictionComplex,
                PriceRange::PriceOnApplication,
            ),
        ]);
        Self { bands }
    }

    /// Look up the band for a tier.
    ///
    /// Every tier has a band in the built-in table; operator-supplied tables
    /// may omit tiers, in which case the caller falls back to
    /// [`PriceRange::PriceOnApplication`].
    pub fn band_for(&self, label: ComplexityLabel) -> Option<&PriceRange> {
        self.bands.get(&label)
    }

    /// Iterate bands in tier order.
    pub fn iter(&self) -> impl Iterator<Item = (&ComplexityLabel, &PriceRange)> {
        self.bands.iter()
    }
}
