use crate::domain::constants::{
    Marker, ARIA_LABEL_MARKER, MIN_ARIA_LABELS, PAGE_MARKERS, ROOT_PAGE_FILE,
};
use crate::domain::models::{CheckResult, Checks};
use crate::services::artifacts::{read_text_lossy, require_file};
use std::path::Path;

pub fn check_root_page(path: &Path) -> anyhow::Result<Vec<CheckResult>> {
    let mut checks = Checks::default();
    if checks
        .require(require_file(path, ROOT_PAGE_FILE, "Run Hugo build first."))
        .is_none()
    {
        return Ok(checks.into_results());
    }
    let html = read_text_lossy(path)?;
    for marker in &PAGE_MARKERS {
        checks.record(check_marker(&html, marker));
    }
    checks.record(check_aria_labels(&html));
    Ok(checks.into_results())
}

fn check_marker(html: &str, marker: &Marker) -> CheckResult {
    if marker.spellings.iter().any(|s| html.contains(s)) {
        CheckResult::pass(marker.pass_label)
    } else {
        CheckResult::fail(marker.fail_label, marker.reason)
    }
}

fn check_aria_labels(html: &str) -> CheckResult {
    let count = html.matches(ARIA_LABEL_MARKER).count();
    if count >= MIN_ARIA_LABELS {
        CheckResult::pass(format!(
            "Accessibility: {} aria-label attributes found",
            count
        ))
    } else {
        CheckResult::fail(
            "Accessibility",
            format!(
                "Only {} aria-labels found (expected ≥{})",
                count, MIN_ARIA_LABELS
            ),
        )
    }
}
