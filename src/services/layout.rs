use crate::domain::constants::{
    ASSET_DIR, OUTPUT_DIR, ROOT_PAGE_FILE, SCRIPT_FILE, SEARCH_INDEX_FILE, WASM_FILE,
};
use std::path::{Path, PathBuf};

/// Filesystem locations of every artifact under test.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    site_dir: PathBuf,
}

impl SiteLayout {
    pub fn new(project_root: &Path, site_dir: &Path) -> Self {
        Self {
            site_dir: project_root.join(site_dir),
        }
    }

    pub fn site_dir(&self) -> &Path {
        &self.site_dir
    }

    pub fn output_dir(&self) -> PathBuf {
        self.site_dir.join(OUTPUT_DIR)
    }

    pub fn search_index(&self) -> PathBuf {
        self.output_dir().join(SEARCH_INDEX_FILE)
    }

    pub fn root_page(&self) -> PathBuf {
        self.output_dir().join(ROOT_PAGE_FILE)
    }

    pub fn asset_dir(&self) -> PathBuf {
        self.site_dir.join(ASSET_DIR)
    }

    pub fn script_asset(&self) -> PathBuf {
        self.asset_dir().join(SCRIPT_FILE)
    }

    pub fn wasm_asset(&self) -> PathBuf {
        self.asset_dir().join(WASM_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::SiteLayout;
    use std::path::Path;

    #[test]
    fn artifacts_resolve_under_the_example_site() {
        let layout = SiteLayout::new(Path::new("/mod"), Path::new("exampleSite"));
        assert_eq!(layout.output_dir(), Path::new("/mod/exampleSite/public"));
        assert_eq!(
            layout.search_index(),
            Path::new("/mod/exampleSite/public/search.json")
        );
        assert_eq!(
            layout.root_page(),
            Path::new("/mod/exampleSite/public/index.html")
        );
        assert_eq!(
            layout.wasm_asset(),
            Path::new("/mod/exampleSite/static/docfind/docfind_bg.wasm")
        );
    }
}
