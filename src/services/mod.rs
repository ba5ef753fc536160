//! Service layer containing the checks and their side-effect helpers.
//!
//! ## Service map
//! - `layout.rs` — where every artifact lives under the example site.
//! - `artifacts.rs` — existence preconditions and artifact reads.
//! - `build.rs` — clean site build through the `BuildRunner` seam.
//! - `search_index.rs` — `search.json` preconditions and record checks.
//! - `html.rs` — markers the rendered root page must carry.
//! - `assets.rs` — compiled script/wasm assets.
//! - `report.rs` — colored console report.
//! - `config.rs` — defaults, `docfind-check.toml`, CLI overrides.
//! - `logging.rs` — tracing subscriber setup.
//!
//! ## Conventions
//! - Checks return results; only environment faults return `Err`.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod artifacts;
pub mod assets;
pub mod build;
pub mod config;
pub mod html;
pub mod layout;
pub mod logging;
pub mod report;
pub mod search_index;
