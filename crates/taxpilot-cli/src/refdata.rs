//! `taxpilot refdata` — dump the reference tables.
//!
//! Prints a table as JSON so support staff can answer "which regime do we
//! model for X" without reading source. Honors the same `--refdata`
//! override as `classify`.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::classify::load_refdata;

/// Arguments for `taxpilot refdata`.
#[derive(Args, Debug)]
pub struct RefdataArgs {
    /// Which table to print.
    #[command(subcommand)]
    pub table: Table,

    /// Replace the built-in reference tables with a YAML/JSON document.
    #[arg(long, global = true)]
    pub refdata: Option<PathBuf>,
}

/// The printable reference tables.
#[derive(Subcommand, Debug)]
pub enum Table {
    /// Country-to-regime mapping with exchange start dates.
    Jurisdictions,
    /// Venue reporting flags.
    Exchanges,
    /// Risk-factor weights.
    Factors,
    /// Price bands per complexity tier.
    Pricing,
}

/// Run the `refdata` subcommand.
pub fn run_refdata(args: &RefdataArgs) -> anyhow::Result<u8> {
    let data = load_refdata(args.refdata.as_deref())?;

    let rendered = match args.table {
        Table::Jurisdictions => {
            serde_json::to_string_pretty(&data.jurisdictions().collect::<Vec<_>>())?
        }
        Table::Exchanges => {
            serde_json::to_string_pretty(&data.exchanges().collect::<Vec<_>>())?
        }
        Table::Factors => {
            serde_json::to_string_pretty(&data.risk_factors().collect::<Vec<_>>())?
        }
        Table::Pricing => serde_json::to_string_pretty(data.pricing())?,
    };
    println!("{rendered}");
    Ok(0)
}
