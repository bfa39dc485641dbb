//! `taxpilot classify` — classify a profile document.
//!
//! Reads a `UserComplianceProfile` from a JSON or YAML file (format chosen
//! by extension, defaulting to JSON) and prints the `ClassificationResult`
//! as JSON on stdout. An unparseable profile exits with
//! [`EXIT_INVALID_INPUT`](crate::EXIT_INVALID_INPUT) rather than 1 so that
//! scripted callers can distinguish bad input from tool failure.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use taxpilot_classifier::{ComplianceClassifier, UserComplianceProfile};
use taxpilot_refdata::ReferenceData;

use crate::EXIT_INVALID_INPUT;

/// Arguments for `taxpilot classify`.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Path to the profile document (.json, .yaml, or .yml).
    pub profile: PathBuf,

    /// Replace the built-in reference tables with a YAML/JSON document.
    #[arg(long)]
    pub refdata: Option<PathBuf>,

    /// Pretty-print the result.
    #[arg(long)]
    pub pretty: bool,
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Load reference tables, either the built-ins or an operator override.
pub fn load_refdata(path: Option<&Path>) -> anyhow::Result<ReferenceData> {
    match path {
        None => Ok(ReferenceData::builtin()),
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading reference data {}", path.display()))?;
            let data = if is_yaml(path) {
                ReferenceData::from_yaml_str(&raw)
            } else {
                ReferenceData::from_json_str(&raw)
            }
            .with_context(|| format!("loading reference data {}", path.display()))?;
            tracing::info!(path = %path.display(), "using reference data override");
            Ok(data)
        }
    }
}

/// Parse a profile document. Returns `None` (not an error) on malformed
/// input so the caller can map it to the dedicated exit code.
fn parse_profile(path: &Path, raw: &str) -> Option<UserComplianceProfile> {
    let result = if is_yaml(path) {
        serde_yaml::from_str(raw).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    };
    match result {
        Ok(profile) => Some(profile),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "invalid profile document");
            None
        }
    }
}

/// Run the `classify` subcommand.
pub fn run_classify(args: &ClassifyArgs) -> anyhow::Result<u8> {
    let refdata = load_refdata(args.refdata.as_deref())?;

    let raw = std::fs::read_to_string(&args.profile)
        .with_context(|| format!("reading profile {}", args.profile.display()))?;
    let Some(profile) = parse_profile(&args.profile, &raw) else {
        return Ok(EXIT_INVALID_INPUT);
    };

    let result = ComplianceClassifier::new(&refdata).classify(&profile);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{rendered}");
    Ok(0)
}
