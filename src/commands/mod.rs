//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `run.rs` — selects categories, runs them in order, feeds the reporter.
//!
//! ## Principles
//! - Parse/match CLI inputs in `main`/`cli`.
//! - Delegate artifact checks to `services/*`.
//! - Keep report wording stable.

pub mod run;

pub use run::{handle_run, RunContext};
