//! Checks for the generated `search.json` index.
//!
//! Existence, parse, array shape and non-emptiness are preconditions: the
//! first one that breaks closes the category. The record checks after that
//! are independent and always all reported.

use crate::domain::constants::{
    BODY_LEAK_PATTERNS, REQUIRED_RECORD_FIELDS, SEARCH_INDEX_FILE, SECTION_SEPARATORS,
};
use crate::domain::models::{CheckResult, Checks, Precondition};
use crate::services::artifacts::{read_bytes, require_file};
use serde_json::Value;
use std::path::Path;

/// Borrowed view of one index entry. Extra fields are ignored.
#[derive(Debug, Clone, Copy)]
pub struct SearchIndexRecord<'a>(&'a Value);

impl<'a> SearchIndexRecord<'a> {
    fn text(&self, field: &str) -> Option<&'a str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&'a str> {
        self.text("title")
    }

    pub fn href(&self) -> Option<&'a str> {
        self.text("href")
    }

    pub fn body(&self) -> Option<&'a str> {
        self.text("body")
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.get(field).is_some()
    }
}

type RecordCheck = fn(&[SearchIndexRecord<'_>]) -> CheckResult;

const RECORD_CHECKS: [RecordCheck; 5] = [
    required_fields,
    href_is_root_relative,
    has_deep_links,
    has_section_titles,
    body_is_plain_text,
];

pub fn check_search_index(path: &Path) -> anyhow::Result<Vec<CheckResult>> {
    let mut checks = Checks::default();
    if let Some(entries) = load_entries(&mut checks, path)? {
        let records: Vec<_> = entries.iter().map(SearchIndexRecord).collect();
        for check in RECORD_CHECKS {
            checks.record(check(&records));
        }
    }
    Ok(checks.into_results())
}

fn load_entries(checks: &mut Checks, path: &Path) -> anyhow::Result<Option<Vec<Value>>> {
    if checks
        .require(require_file(path, SEARCH_INDEX_FILE, "Run Hugo build first."))
        .is_none()
    {
        return Ok(None);
    }
    let raw = read_bytes(path)?;
    let entries = checks
        .require(parse(&raw))
        .and_then(|doc| checks.require(as_array(doc)))
        .and_then(|entries| checks.require(non_empty(entries)));
    Ok(entries)
}

/// Invalid UTF-8 is a parse failure like any other malformed input.
fn parse(raw: &[u8]) -> Precondition<Value> {
    match serde_json::from_slice(raw) {
        Ok(doc) => Precondition::holds("search.json is valid JSON", doc),
        Err(err) => Precondition::broken("search.json is valid JSON", err.to_string()),
    }
}

fn as_array(doc: Value) -> Precondition<Vec<Value>> {
    match doc {
        Value::Array(entries) => Precondition::holds("search.json is array", entries),
        other => Precondition::broken(
            "search.json is array",
            format!("Got {}", json_type_name(&other)),
        ),
    }
}

fn non_empty(entries: Vec<Value>) -> Precondition<Vec<Value>> {
    if entries.is_empty() {
        Precondition::broken("search.json has entries", "Array is empty")
    } else {
        Precondition::holds(format!("search.json has {} entries", entries.len()), entries)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Object(_) => "object",
        Value::Array(_) => "array",
    }
}

fn required_fields(records: &[SearchIndexRecord<'_>]) -> CheckResult {
    let missing: Vec<&str> = REQUIRED_RECORD_FIELDS
        .into_iter()
        .filter(|f| !records.first().is_some_and(|r| r.has_field(f)))
        .collect();
    if missing.is_empty() {
        CheckResult::pass("Entries have required fields (title, href, body)")
    } else {
        CheckResult::fail(
            "Entry has required fields",
            format!("Missing: {}", missing.join(", ")),
        )
    }
}

fn href_is_root_relative(records: &[SearchIndexRecord<'_>]) -> CheckResult {
    let href = records.first().and_then(|r| r.href());
    match href {
        Some(h) if h.starts_with('/') => CheckResult::pass("href values are relative URLs"),
        Some(h) => CheckResult::fail("href is relative URL", format!("Got: {}", h)),
        None => CheckResult::fail("href is relative URL", "Got: undefined"),
    }
}

fn has_deep_links(records: &[SearchIndexRecord<'_>]) -> CheckResult {
    if records
        .iter()
        .any(|r| r.href().is_some_and(|h| h.contains('#')))
    {
        CheckResult::pass("Deep linking detected (href contains #)")
    } else {
        CheckResult::fail(
            "Deep linking",
            "No entries with anchors (#) found. Section splitting might be failing.",
        )
    }
}

fn has_section_titles(records: &[SearchIndexRecord<'_>]) -> CheckResult {
    let is_section_title = |title: &str| SECTION_SEPARATORS.iter().any(|s| title.contains(s));
    if records
        .iter()
        .any(|r| r.title().is_some_and(is_section_title))
    {
        CheckResult::pass("Section titles detected (Title > Section)")
    } else {
        CheckResult::fail("Section titles", "No entries with \" > \" separators found.")
    }
}

fn body_is_plain_text(records: &[SearchIndexRecord<'_>]) -> CheckResult {
    let leaked: Vec<&str> = BODY_LEAK_PATTERNS
        .iter()
        .filter(|(pattern, _)| {
            records
                .iter()
                .any(|r| r.body().is_some_and(|b| b.contains(pattern)))
        })
        .map(|(_, kind)| *kind)
        .collect();
    if leaked.is_empty() {
        CheckResult::pass("Content is clean (No HTML attribute leakage)")
    } else {
        CheckResult::fail(
            "Content hygiene",
            format!("Found raw HTML ({}) in body content.", leaked.join(", ")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::check_search_index;
    use crate::domain::models::CheckResult;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn index_with(content: &str) -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("search.json");
        std::fs::write(&path, content).unwrap();
        (tmp, path)
    }

    fn failed_labels(results: &[CheckResult]) -> Vec<&str> {
        results
            .iter()
            .filter(|r| !r.passed())
            .map(|r| r.label.as_str())
            .collect()
    }

    #[test]
    fn well_formed_index_passes_all_nine_checks() {
        let doc = json!([{"title": "A > B", "href": "/a/#b", "body": "text"}]);
        let (_tmp, path) = index_with(&doc.to_string());
        let results = check_search_index(&path).unwrap();
        assert_eq!(results.len(), 9);
        assert!(results.iter().all(CheckResult::passed), "{:?}", results);
        assert_eq!(results[3].label, "search.json has 1 entries");
    }

    #[test]
    fn leaked_markup_fails_hygiene_and_collection_checks() {
        let doc = json!([{"title": "A", "href": "/a", "body": "has <h2>leak</h2>"}]);
        let (_tmp, path) = index_with(&doc.to_string());
        let results = check_search_index(&path).unwrap();
        assert_eq!(results.len(), 9);
        assert_eq!(
            failed_labels(&results),
            vec!["Deep linking", "Section titles", "Content hygiene"]
        );
        let hygiene = results.last().unwrap();
        assert_eq!(
            hygiene.failure.as_deref(),
            Some("Found raw HTML (<h2> tags) in body content.")
        );
    }

    #[test]
    fn missing_file_is_a_single_failure() {
        let tmp = TempDir::new().unwrap();
        let results = check_search_index(&tmp.path().join("search.json")).unwrap();
        assert_eq!(
            results,
            vec![CheckResult::fail(
                "search.json exists",
                "File not found. Run Hugo build first."
            )]
        );
    }

    #[test]
    fn unparseable_json_stops_after_parse() {
        let (_tmp, path) = index_with("[{\"title\": ");
        let results = check_search_index(&path).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].passed());
        assert_eq!(results[1].label, "search.json is valid JSON");
        assert!(!results[1].passed());
    }

    #[test]
    fn object_document_is_not_an_array() {
        let (_tmp, path) = index_with("{\"title\": \"A\"}");
        let results = check_search_index(&path).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[2],
            CheckResult::fail("search.json is array", "Got object")
        );
    }

    #[test]
    fn empty_array_stops_before_record_checks() {
        let (_tmp, path) = index_with("[]");
        let results = check_search_index(&path).unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(
            results[3],
            CheckResult::fail("search.json has entries", "Array is empty")
        );
    }

    #[test]
    fn missing_fields_are_named_and_later_checks_still_run() {
        let doc = json!([
            {"title": "Guide"},
            {"title": "Guide > Install", "href": "/guide/#install", "body": "run it", "extra": 1}
        ]);
        let (_tmp, path) = index_with(&doc.to_string());
        let results = check_search_index(&path).unwrap();
        assert_eq!(results.len(), 9);
        assert_eq!(
            results[4],
            CheckResult::fail("Entry has required fields", "Missing: href, body")
        );
        assert_eq!(
            failed_labels(&results),
            vec!["Entry has required fields", "href is relative URL"]
        );
    }

    #[test]
    fn absolute_href_is_reported_with_its_value() {
        let doc = json!([{"title": "A > B", "href": "https://x.dev/a#b", "body": "t"}]);
        let (_tmp, path) = index_with(&doc.to_string());
        let results = check_search_index(&path).unwrap();
        assert_eq!(
            results[5],
            CheckResult::fail("href is relative URL", "Got: https://x.dev/a#b")
        );
    }

    #[test]
    fn bare_angle_bracket_counts_as_section_title() {
        let (_tmp, path) =
            index_with(r#"[{"title": "Guide>Install", "href": "/g/#i", "body": "t"}]"#);
        let results = check_search_index(&path).unwrap();
        assert!(results.iter().all(CheckResult::passed), "{:?}", results);
    }

    #[test]
    fn title_without_any_separator_fails() {
        let doc = json!([{"title": "Guide Install", "href": "/g/#i", "body": "t"}]);
        let (_tmp, path) = index_with(&doc.to_string());
        let results = check_search_index(&path).unwrap();
        assert_eq!(failed_labels(&results), vec!["Section titles"]);
    }

    #[test]
    fn invalid_utf8_is_reported_as_invalid_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("search.json");
        std::fs::write(
            &path,
            b"[{\"title\": \"A > B\", \"href\": \"/a/#b\", \"body\": \"caf\xE9\"}]",
        )
        .unwrap();
        let results = check_search_index(&path).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].passed());
        assert_eq!(results[1].label, "search.json is valid JSON");
        assert!(!results[1].passed());
    }

    #[test]
    fn non_object_first_record_is_missing_every_field() {
        let doc = json!([5, {"title": "A > B", "href": "/a/#b", "body": "t"}]);
        let (_tmp, path) = index_with(&doc.to_string());
        let results = check_search_index(&path).unwrap();
        assert_eq!(results.len(), 9);
        assert_eq!(
            results[4],
            CheckResult::fail("Entry has required fields", "Missing: title, href, body")
        );
        assert_eq!(
            results[5],
            CheckResult::fail("href is relative URL", "Got: undefined")
        );
    }

    #[test]
    fn numeric_href_is_treated_as_undefined() {
        let doc = json!([{"title": "A > B", "href": 5, "body": "t"}]);
        let (_tmp, path) = index_with(&doc.to_string());
        let results = check_search_index(&path).unwrap();
        assert!(results[4].passed());
        assert_eq!(
            results[5],
            CheckResult::fail("href is relative URL", "Got: undefined")
        );
        assert_eq!(
            failed_labels(&results),
            vec!["href is relative URL", "Deep linking"]
        );
    }

    #[test]
    fn null_href_is_present_but_not_a_relative_url() {
        let doc = json!([{"title": "A > B", "href": null, "body": "t"}]);
        let (_tmp, path) = index_with(&doc.to_string());
        let results = check_search_index(&path).unwrap();
        assert_eq!(
            results[4].label,
            "Entries have required fields (title, href, body)"
        );
        assert_eq!(
            results[5],
            CheckResult::fail("href is relative URL", "Got: undefined")
        );
    }

    #[test]
    fn id_attribute_leak_is_named() {
        let doc = json!([{"title": "A > B", "href": "/a/#b", "body": "see id=\"x\" and <h2"}]);
        let (_tmp, path) = index_with(&doc.to_string());
        let results = check_search_index(&path).unwrap();
        assert_eq!(
            results[8].failure.as_deref(),
            Some("Found raw HTML (id=\"...\" attributes, <h2> tags) in body content.")
        );
    }

    #[test]
    fn rerunning_on_unchanged_index_is_identical() {
        let doc = json!([{"title": "A", "href": "a", "body": "b"}]);
        let (_tmp, path) = index_with(&doc.to_string());
        assert_eq!(
            check_search_index(&path).unwrap(),
            check_search_index(&path).unwrap()
        );
    }
}
