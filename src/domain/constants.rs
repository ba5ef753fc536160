pub const SITE_DIR: &str = "exampleSite";
pub const OUTPUT_DIR: &str = "public";
pub const ASSET_DIR: &str = "static/docfind";

pub const SEARCH_INDEX_FILE: &str = "search.json";
pub const ROOT_PAGE_FILE: &str = "index.html";
pub const SCRIPT_FILE: &str = "docfind.js";
pub const WASM_FILE: &str = "docfind_bg.wasm";

pub const DEFAULT_HUGO_BIN: &str = "hugo";
/// Always passed to Hugo; the page checks assume minified output.
pub const MINIFY_FLAG: &str = "--minify";

pub const REQUIRED_RECORD_FIELDS: [&str; 3] = ["title", "href", "body"];

/// Title separator between a page and its section. Minified output may
/// emit it as a `\u003e` escape, which decodes to a bare `>`.
pub const SECTION_SEPARATORS: [&str; 2] = [" > ", "\u{3e}"];

/// Markup that must never survive into extracted body text.
pub const BODY_LEAK_PATTERNS: [(&str, &str); 2] =
    [("id=\"", "id=\"...\" attributes"), ("<h2", "<h2> tags")];

pub const ARIA_LABEL_MARKER: &str = "aria-label=";
pub const MIN_ARIA_LABELS: usize = 2;

/// A literal the root page must contain in at least one of its spellings.
///
/// Minification may drop attribute quotes or escape slashes, so every
/// accepted spelling is listed.
pub struct Marker {
    pub pass_label: &'static str,
    pub fail_label: &'static str,
    pub reason: &'static str,
    pub spellings: &'static [&'static str],
}

pub const PAGE_MARKERS: [Marker; 5] = [
    Marker {
        pass_label: "DocFind CSS styles present",
        fail_label: "DocFind CSS present",
        reason: "Missing .docfind-container styles",
        spellings: &[".docfind-container"],
    },
    Marker {
        pass_label: "Inline search input present",
        fail_label: "Inline search input",
        reason: "Missing #docfind-input",
        spellings: &["id=\"docfind-input\"", "id=docfind-input"],
    },
    Marker {
        pass_label: "Expandable widget present",
        fail_label: "Expandable widget",
        reason: "Missing #docfind-expandable",
        spellings: &["id=\"docfind-expandable\"", "id=docfind-expandable"],
    },
    Marker {
        pass_label: "DocFind script import present",
        fail_label: "DocFind script import",
        reason: "Missing docfind.js import",
        spellings: &["docfind/docfind.js", "docfind\\/docfind.js"],
    },
    Marker {
        pass_label: "WASM import present",
        fail_label: "WASM import",
        reason: "Missing docfind_bg.wasm reference",
        spellings: &["docfind_bg.wasm"],
    },
];
