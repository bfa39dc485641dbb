//! # Risk Factor Table
//!
//! Self-reported boolean conditions with weighted contributions to the risk
//! score. Weights are positive integers; a factor the user has not activated
//! simply does not appear in the profile, and an activated id with no entry
//! here contributes nothing.

use serde::{Deserialize, Serialize};

/// One row of the risk-factor reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Factor slug used by the questionnaire (e.g. "unreported").
    pub id: String,
    /// Positive contribution to the risk score when activated.
    pub weight: u32,
    /// What the user actually confirmed.
    pub description: String,
}

fn factor(id: &str, weight: u32, description: &str) -> RiskFactor {
    RiskFactor {
        id: id.to_string(),
        weight,
        description: description.to_string(),
    }
}

/// The built-in risk-factor table.
pub fn builtin_risk_factors() -> Vec<RiskFactor> {
    vec![
        factor("unreported", 3, "Has crypto gains not reported in a prior filing"),
        factor("defi", 2, "Has used DeFi protocols (lending, LPs, yield)"),
        factor("no_records", 2, "Missing transaction records for one or more venues"),
        factor("mining", 1, "Has mining income"),
        factor("staking", 1, "Has staking rewards"),
        factor("nft_trading", 1, "Has traded NFTs"),
    ]
}
