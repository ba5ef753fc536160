use crate::domain::constants::{SCRIPT_FILE, WASM_FILE};
use crate::domain::models::{CheckResult, Checks};
use crate::services::artifacts::{require_dir, size_kb};
use crate::services::layout::SiteLayout;

pub fn check_assets(layout: &SiteLayout) -> anyhow::Result<Vec<CheckResult>> {
    let mut checks = Checks::default();
    if checks
        .require(require_dir(
            &layout.asset_dir(),
            "static/docfind/",
            "Run build script first.",
        ))
        .is_none()
    {
        return Ok(checks.into_results());
    }

    checks.record(if layout.script_asset().is_file() {
        CheckResult::pass(format!("{} exists", SCRIPT_FILE))
    } else {
        CheckResult::fail(format!("{} exists", SCRIPT_FILE), "File not found")
    });

    let wasm = layout.wasm_asset();
    checks.record(if wasm.is_file() {
        CheckResult::pass(format!("{} exists ({})", WASM_FILE, size_kb(&wasm)?))
    } else {
        CheckResult::fail(format!("{} exists", WASM_FILE), "File not found")
    });

    Ok(checks.into_results())
}
