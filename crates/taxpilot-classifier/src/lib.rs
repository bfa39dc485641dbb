//! # taxpilot-classifier — Compliance Risk & Pricing Classifier
//!
//! Maps a user's self-reported compliance profile to a risk level (for
//! messaging) and a complexity tier with an estimated price band (for
//! quoting), against the reference tables in `taxpilot-refdata`.
//!
//! ## Contract
//!
//! The classifier is a pure, stateless, total function. It is called on
//! every answer change of an in-progress questionnaire, so:
//!
//! - Missing, unknown, or unanswered input contributes zero — it never
//!   errors and never panics.
//! - There is no I/O and no shared mutable state; concurrent calls need no
//!   coordination.
//! - Identical profiles always produce identical results.
//!
//! ```
//! use taxpilot_classifier::{ComplianceClassifier, UserComplianceProfile};
//! use taxpilot_core::CountryCode;
//! use taxpilot_refdata::ReferenceData;
//!
//! let refdata = ReferenceData::builtin();
//! let classifier = ComplianceClassifier::new(&refdata);
//! let profile = UserComplianceProfile::new(CountryCode::new("DE")?);
//! let result = classifier.classify(&profile);
//! assert_eq!(result.risk_score, 3); // DAC8 residence, nothing else answered
//! # Ok::<(), taxpilot_core::ValidationError>(())
//! ```

pub mod classify;
pub mod profile;
pub mod score;

pub use classify::{
    complexity_label_for, risk_level_for, ClassificationResult, ComplianceClassifier,
};
pub use profile::{PreviousResidence, UserComplianceProfile};
pub use score::{complexity_score, risk_score, RiskBreakdown};
