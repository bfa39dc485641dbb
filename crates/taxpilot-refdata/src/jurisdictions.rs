//! # Jurisdiction Regime Table
//!
//! The built-in mapping from country code to cross-border crypto reporting
//! regime. Three groups:
//!
//! - **DAC8** — all 27 EU member states; reporting active since 2026-01-01.
//! - **CARF** — first-wave OECD signatories; first exchanges 2027-01-01.
//! - **None** — countries with no automatic exchange framework modeled.
//!
//! Entries carry the date automatic exchange begins/began; `None`-regime
//! entries carry no date. The table is keyed data, not policy: the risk
//! weights live on [`RegimeKind`].

use chrono::NaiveDate;
use taxpilot_core::{CountryCode, JurisdictionRegime, RegimeKind};

/// Date DAC8 reporting became active across the EU.
const DAC8_START: (i32, u32, u32) = (2026, 1, 1);

/// Date of the first CARF exchange wave.
const CARF_START: (i32, u32, u32) = (2027, 1, 1);

fn entry(code: &str, regime: RegimeKind, start: Option<(i32, u32, u32)>) -> JurisdictionRegime {
    // Codes below are compile-time literals; the table-integrity tests
    // exercise every row.
    let country = CountryCode::new(code).expect("built-in country code is valid");
    JurisdictionRegime {
        country,
        regime,
        exchange_start: start.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
    }
}

fn dac8(code: &str) -> JurisdictionRegime {
    entry(code, RegimeKind::Dac8, Some(DAC8_START))
}

fn carf(code: &str) -> JurisdictionRegime {
    entry(code, RegimeKind::Carf, Some(CARF_START))
}

fn none(code: &str) -> JurisdictionRegime {
    entry(code, RegimeKind::None, None)
}

/// The built-in jurisdiction-regime table.
pub fn builtin_jurisdictions() -> Vec<JurisdictionRegime> {
    let mut table = Vec::with_capacity(48);

    // EU member states — DAC8, already reporting.
    for code in [
        "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "EE", "FI", "FR", "DE", "GR", "HU", "IE",
        "IT", "LV", "LT", "LU", "MT", "NL", "PL", "PT", "RO", "SK", "SI", "ES", "SE",
    ] {
        table.push(dac8(code));
    }

    // CARF first-wave signatories — exchanges begin 2027.
    for code in [
        "GB", "CH", "NO", "IS", "LI", "CA", "AU", "NZ", "JP", "KR", "SG", "MX", "BR", "ZA",
        "AE",
    ] {
        table.push(carf(code));
    }

    // No automatic exchange framework modeled.
    for code in ["US", "TR", "IN", "CN", "RU", "AR"] {
        table.push(none(code));
    }

    table
}
