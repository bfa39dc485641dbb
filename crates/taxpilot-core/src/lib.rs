//! # taxpilot-core — Foundational Types for the Taxpilot Classifier
//!
//! This crate is the bedrock of the Taxpilot classifier stack. It defines the
//! type-system primitives every other crate builds on; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `CountryCode` and `TaxYear`
//!    are newtypes with validated constructors. No bare strings for
//!    identifiers that have a format.
//!
//! 2. **Single source of truth for each enum.** `RegimeKind`,
//!    `AssetCategory`, and `ExchangeCountBucket` are each defined once and
//!    matched exhaustively everywhere. Adding a variant forces every
//!    consumer to handle it at compile time.
//!
//! 3. **Degrade, never fail, on partial input.** The classifier runs against
//!    in-progress questionnaires; types here validate *format* (a country
//!    code is two letters) but the scoring layer treats unknown ids as
//!    zero-contribution, never as errors.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `taxpilot-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod assets;
pub mod classification;
pub mod country;
pub mod error;
pub mod regime;
pub mod tax_year;

// Re-export primary types for ergonomic imports.
pub use assets::{AssetCategory, ExchangeCountBucket, ASSET_CATEGORY_COUNT};
pub use classification::{ComplexityLabel, RiskLevel};
pub use country::CountryCode;
pub use error::{RefDataError, TaxpilotError, ValidationError};
pub use regime::{JurisdictionRegime, RegimeKind};
pub use tax_year::TaxYear;
