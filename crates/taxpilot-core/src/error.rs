//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the Taxpilot stack. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation errors name the violating value, not just the rule.
//! - Reference-data loading errors include the table and key in conflict.
//! - The scoring path itself produces no errors at all: partial or unknown
//!   questionnaire input degrades to zero contribution by contract.

use thiserror::Error;

/// Top-level error type for the Taxpilot stack.
#[derive(Error, Debug)]
pub enum TaxpilotError {
    /// A domain value failed format validation at construction.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A reference-data table failed integrity checks at load time.
    #[error("reference data error: {0}")]
    RefData(#[from] RefDataError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error constructing a validated domain value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Country codes must be exactly two ASCII letters (ISO 3166-1 alpha-2).
    #[error("invalid country code {0:?}: expected two ASCII letters")]
    InvalidCountryCode(String),

    /// Tax-year labels must be non-empty.
    #[error("tax year label must not be empty")]
    EmptyTaxYear,

    /// An enum identifier string did not match any known variant.
    #[error("unknown {kind} identifier: {value:?}")]
    UnknownIdentifier {
        /// The enum family being parsed (e.g. "asset category").
        kind: &'static str,
        /// The unrecognized input.
        value: String,
    },
}

/// Error loading or validating a reference-data table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefDataError {
    /// Two jurisdiction entries claimed the same country code.
    #[error("duplicate jurisdiction entry for country {0}")]
    DuplicateCountry(String),

    /// Two entries in a keyed table claimed the same id.
    #[error("duplicate {table} entry for id {id:?}")]
    DuplicateId {
        /// The table with the collision.
        table: &'static str,
        /// The colliding id.
        id: String,
    },

    /// Risk-factor weights must be positive; zero-weight factors are
    /// misconfiguration, not a way to disable a factor.
    #[error("risk factor {0:?} has zero weight")]
    ZeroWeight(String),

    /// A quoted price band had its bounds inverted.
    #[error("price band for {label} has low {low} > high {high}")]
    InvertedPriceBand {
        /// The complexity tier with the bad band.
        label: String,
        /// Lower bound as configured.
        low: u32,
        /// Upper bound as configured.
        high: u32,
    },

    /// The override document could not be parsed.
    #[error("failed to parse reference data: {0}")]
    Parse(String),
}
