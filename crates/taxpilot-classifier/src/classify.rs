//! # Classification
//!
//! Threshold mapping from scores to labels, and the `ComplianceClassifier`
//! that composes scoring, labeling, and price lookup into a single
//! `ClassificationResult`.
//!
//! Thresholds are fixed product constants, evaluated highest-first with
//! inclusive lower bounds. The multi-jurisdiction pricing branch is checked
//! before the plain complex threshold but requires a strictly higher score
//! (10 vs 8); a two-country profile scoring 9 is Complex, not
//! MultiJurisdictionComplex. That asymmetry is intentional — the premium
//! tier needs a materially heavier profile, not just a second country.

use serde::{Deserialize, Serialize};

use taxpilot_core::{ComplexityLabel, RiskLevel};
use taxpilot_refdata::{PriceRange, ReferenceData};

use crate::profile::UserComplianceProfile;
use crate::score::{complexity_score, risk_score, RiskBreakdown};

/// Map a risk score to its messaging tier.
///
/// Total over all scores: >= 8 Critical, >= 5 High, >= 3 Medium, else Low.
pub fn risk_level_for(score: u32) -> RiskLevel {
    if score >= 8 {
        RiskLevel::Critical
    } else if score >= 5 {
        RiskLevel::High
    } else if score >= 3 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Map a complexity score and jurisdiction count to a pricing tier.
pub fn complexity_label_for(score: u32, country_count: u32) -> ComplexityLabel {
    if country_count > 1 && score >= 10 {
        ComplexityLabel::MultiJurisdictionComplex
    } else if score >= 8 {
        ComplexityLabel::Complex
    } else if score >= 5 {
        ComplexityLabel::Moderate
    } else {
        ComplexityLabel::Simple
    }
}

/// The classifier's complete output for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Total risk score (no upper bound).
    pub risk_score: u32,
    /// Messaging tier derived from the risk score.
    pub risk_level: RiskLevel,
    /// Per-source contributions summing to `risk_score`.
    pub risk_breakdown: RiskBreakdown,
    /// Total complexity score.
    pub complexity_score: u32,
    /// Pricing tier derived from the complexity score.
    pub complexity_label: ComplexityLabel,
    /// Jurisdictions in scope (residence plus distinct previous).
    pub country_count: u32,
    /// The quoted band (or price-on-application) for the tier.
    pub estimated_price_range: PriceRange,
}

/// Stateless classifier over a set of reference tables.
///
/// Borrowing the tables keeps repeated classification cheap: the caller
/// holds one `ReferenceData` for the process lifetime and re-runs
/// [`classify`](Self::classify) on every answer change.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceClassifier<'a> {
    refdata: &'a ReferenceData,
}

impl<'a> ComplianceClassifier<'a> {
    /// Create a classifier over the given reference tables.
    pub fn new(refdata: &'a ReferenceData) -> Self {
        Self { refdata }
    }

    /// Classify a profile. Pure and total: partial profiles classify with
    /// zero contributions from the unanswered parts, and nothing here can
    /// fail or block.
    pub fn classify(&self, profile: &UserComplianceProfile) -> ClassificationResult {
        let breakdown = risk_score(profile, self.refdata);
        let risk_total = breakdown.total();

        let complexity = complexity_score(profile);
        let country_count = profile.country_count();
        let label = complexity_label_for(complexity, country_count);

        ClassificationResult {
            risk_score: risk_total,
            risk_level: risk_level_for(risk_total),
            risk_breakdown: breakdown,
            complexity_score: complexity,
            complexity_label: label,
            country_count,
            estimated_price_range: self.refdata.price_for(label),
        }
    }
}
