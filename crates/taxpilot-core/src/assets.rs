//! # Asset Categories & Exchange-Count Buckets
//!
//! The questionnaire's self-reported categorical answers: which kinds of
//! assets the user holds, and roughly how many crypto venues they have used.
//! Both feed the complexity score, not the risk score.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// A category of asset or income the user reports holding.
///
/// Each category contributes one point to the complexity score; the count
/// matters, not which categories are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    /// Crypto-assets (exchange, self-custody, or both).
    Crypto,
    /// Listed stocks and funds.
    Stocks,
    /// Rental property income.
    Rental,
    /// Business or self-employment income.
    Business,
    /// Employment income earned in more than one country.
    EmploymentMultiCountry,
    /// Pension income or pension transfers.
    Pension,
    /// Anything the questionnaire does not enumerate.
    Other,
}

/// Total number of asset categories. Used for table-integrity assertions.
pub const ASSET_CATEGORY_COUNT: usize = 7;

impl AssetCategory {
    /// Returns all asset categories in canonical order.
    pub fn all() -> &'static [AssetCategory] {
        &[
            Self::Crypto,
            Self::Stocks,
            Self::Rental,
            Self::Business,
            Self::EmploymentMultiCountry,
            Self::Pension,
            Self::Other,
        ]
    }

    /// Returns the snake_case string identifier for this category.
    ///
    /// Must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crypto => "crypto",
            Self::Stocks => "stocks",
            Self::Rental => "rental",
            Self::Business => "business",
            Self::EmploymentMultiCountry => "employment_multi_country",
            Self::Pension => "pension",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crypto" => Ok(Self::Crypto),
            "stocks" => Ok(Self::Stocks),
            "rental" => Ok(Self::Rental),
            "business" => Ok(Self::Business),
            "employment_multi_country" => Ok(Self::EmploymentMultiCountry),
            "pension" => Ok(Self::Pension),
            "other" => Ok(Self::Other),
            other => Err(ValidationError::UnknownIdentifier {
                kind: "asset category",
                value: other.to_string(),
            }),
        }
    }
}

/// The questionnaire's self-reported venue-count bucket.
///
/// This is a bucket string chosen from a dropdown, not an exact count — it
/// is independent of how many venue ids the user actually ticked in
/// `exchanges_used`. Only the two upper buckets affect the complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExchangeCountBucket {
    /// "1-5" venues.
    #[serde(rename = "1-5")]
    UpToFive,
    /// "5-15" venues.
    #[serde(rename = "5-15")]
    FiveToFifteen,
    /// "15-30" venues.
    #[serde(rename = "15-30")]
    FifteenToThirty,
    /// "30+" venues.
    #[serde(rename = "30+")]
    ThirtyPlus,
}

impl ExchangeCountBucket {
    /// Returns all buckets in ascending order.
    pub fn all() -> &'static [ExchangeCountBucket] {
        &[
            Self::UpToFive,
            Self::FiveToFifteen,
            Self::FifteenToThirty,
            Self::ThirtyPlus,
        ]
    }

    /// Returns the questionnaire's bucket string (e.g. `"15-30"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpToFive => "1-5",
            Self::FiveToFifteen => "5-15",
            Self::FifteenToThirty => "15-30",
            Self::ThirtyPlus => "30+",
        }
    }

    /// Whether this bucket counts as "many venues" for complexity scoring.
    pub fn is_many(&self) -> bool {
        matches!(self, Self::FifteenToThirty | Self::ThirtyPlus)
    }
}

impl std::fmt::Display for ExchangeCountBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExchangeCountBucket {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-5" => Ok(Self::UpToFive),
            "5-15" => Ok(Self::FiveToFifteen),
            "15-30" => Ok(Self::FifteenToThirty),
            "30+" => Ok(Self::ThirtyPlus),
            other => Err(ValidationError::UnknownIdentifier {
                kind: "exchange count bucket",
                value: other.to_string(),
            }),
        }
    }
}
