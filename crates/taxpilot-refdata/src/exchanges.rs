//! # Exchange Descriptor Table
//!
//! Which crypto venues are modeled as CARF/DAC8 reporters. A venue reports
//! if it is (or has announced it will be) in scope of an automatic-exchange
//! framework in at least one jurisdiction where it onboards customers —
//! which covers every major centralized exchange. Venues modeled as
//! non-reporting are offshore exchanges with no framework participation.
//!
//! Ids are the questionnaire's venue slugs ("binance", "crypto_com"). The
//! scoring layer ignores ids with no entry here.

use serde::{Deserialize, Serialize};

/// One row of the exchange reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeDescriptor {
    /// Venue slug used by the questionnaire.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether this venue is modeled as a CARF/DAC8 reporter.
    pub reports_to_authorities: bool,
}

fn venue(id: &str, name: &str, reports: bool) -> ExchangeDescriptor {
    ExchangeDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        reports_to_authorities: reports,
    }
}

/// The built-in exchange table.
pub fn builtin_exchanges() -> Vec<ExchangeDescriptor> {
    vec![
        // Major centralized venues — all modeled as reporters.
        venue("binance", "Binance", true),
        venue("coinbase", "Coinbase", true),
        venue("kraken", "Kraken", true),
        venue("bitstamp", "Bitstamp", true),
        venue("gemini", "Gemini", true),
        venue("crypto_com", "Crypto.com", true),
        venue("okx", "OKX", true),
        venue("bybit", "Bybit", true),
        venue("kucoin", "KuCoin", true),
        venue("bitfinex", "Bitfinex", true),
        venue("bitpanda", "Bitpanda", true),
        venue("etoro", "eToro", true),
        venue("revolut", "Revolut", true),
        venue("uphold", "Uphold", true),
        // Offshore venues with no framework participation modeled.
        venue("mexc", "MEXC", false),
        venue("htx", "HTX", false),
        venue("phemex", "Phemex", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_no_duplicate_ids() {
        let mut seen = HashSet::new();
        for row in builtin_exchanges() {
            assert!(seen.insert(row.id.clone()), "duplicate venue id {}", row.id);
        }
    }

    #[test]
    fn ids_are_lower_snake_slugs() {
        for row in builtin_exchanges() {
            assert!(
                row.id
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "bad slug {:?}",
                row.id
            );
        }
    }

    #[test]
    fn scenario_anchors_are_reporters() {
        let table = builtin_exchanges();
        for id in ["binance", "coinbase", "kraken"] {
            let row = table
                .iter()
                .find(|r| r.id == id)
                .unwrap_or_else(|| panic!("missing {id}"));
            assert!(row.reports_to_authorities);
        }
    }

    #[test]
    fn some_venues_are_non_reporting() {
        assert!(builtin_exchanges()
            .iter()
            .any(|r| !r.reports_to_authorities));
    }

    #[test]
    fn descriptor_serde_roundtrip() {
        let row = venue("binance", "Binance", true);
        let json = serde_json::to_string(&row).unwrap();
        let deser: ExchangeDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(row, deser);
    }
}
