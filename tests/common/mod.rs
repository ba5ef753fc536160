#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const GOOD_INDEX: &str = r#"[
  {"title": "Getting Started", "href": "/docs/start/", "body": "Install the module."},
  {"title": "Getting Started > Configure", "href": "/docs/start/#configure", "body": "Set the params.", "weight": 3}
]"#;

pub const GOOD_PAGE: &str = r#"<!doctype html><html><head><style>.docfind-container{position:relative}</style></head><body><div class=docfind-container><input id=docfind-input type=search aria-label="Search documentation"></div><div id=docfind-expandable><button aria-label="Open search"></button></div><script type=module>import init from"\/docfind\/docfind.js";await init("/docfind/docfind_bg.wasm")</script></body></html>"#;

/// A throwaway module checkout with an empty `exampleSite/`.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub site: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("docfind-hugo");
        let site = root.join("exampleSite");
        fs::create_dir_all(&site).expect("create example site");
        Self {
            _tmp: tmp,
            root,
            site,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("docfind-check");
        cmd.env_remove("DOCFIND_CHECK_LOG")
            .env_remove("RUST_LOG")
            .arg("--no-color")
            .arg("--project-root")
            .arg(&self.root);
        cmd
    }

    pub fn public(&self) -> PathBuf {
        self.site.join("public")
    }

    pub fn write_output(&self, name: &str, content: &str) {
        let public = self.public();
        fs::create_dir_all(&public).expect("create public dir");
        fs::write(public.join(name), content).expect("write output artifact");
    }

    pub fn write_assets(&self, script: bool, wasm: bool) {
        let dir = self.site.join("static/docfind");
        fs::create_dir_all(&dir).expect("create asset dir");
        if script {
            fs::write(dir.join("docfind.js"), "export default function init() {}")
                .expect("write script");
        }
        if wasm {
            fs::write(dir.join("docfind_bg.wasm"), vec![0u8; 3072]).expect("write wasm");
        }
    }

    /// Stands in for hugo: copies `seed/` into `public/` from the site dir.
    pub fn seed_fake_build(&self, files: &[(&str, &str)]) {
        let seed = self.root.join("seed");
        fs::create_dir_all(&seed).expect("create seed dir");
        for (name, content) in files {
            fs::write(seed.join(name), content).expect("write seed file");
        }
        fs::write(
            self.root.join("docfind-check.toml"),
            "hugo_bin = \"sh\"\nhugo_args = [\"-c\", \"mkdir -p public && cp -R ../seed/. public/\"]\n",
        )
        .expect("write config");
    }
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.output().expect("run docfind-check");
    String::from_utf8(out.stdout).expect("utf8 stdout")
}
