//! # taxpilot-cli — Subcommand Handlers
//!
//! Each subcommand lives in its own module and exposes an `Args` struct
//! (clap derive) plus a `run_*` function returning `anyhow::Result<u8>`,
//! where the `u8` is the process exit code. The binary in `main.rs` owns
//! argument parsing, tracing setup, and dispatch.

pub mod classify;
pub mod quick;
pub mod refdata;

/// Exit code for malformed input documents (as opposed to internal errors,
/// which exit 1 via the `anyhow` path).
pub const EXIT_INVALID_INPUT: u8 = 2;
