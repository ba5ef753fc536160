//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep check/report structs in one place.
//! - Keep artifact names and markup markers reviewable in one file.
//!
//! ## Files
//! - `models.rs` — check results, preconditions, category reports, run summary.
//! - `constants.rs` — artifact file names and the markers the HTML must carry.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/process side effects.

pub mod constants;
pub mod models;
