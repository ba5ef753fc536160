use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "docfind-check.toml";

#[derive(Parser, Debug)]
#[command(
    name = "docfind-check",
    version,
    about = "Build the DocFind example site and verify its generated artifacts"
)]
pub struct Cli {
    #[arg(long, value_enum, help = "Run only one category of checks")]
    pub only: Option<Category>,
    #[arg(
        long,
        default_value = ".",
        help = "Module root containing the example site"
    )]
    pub project_root: PathBuf,
    #[arg(long, help = "Example site directory, relative to the project root")]
    pub site_dir: Option<PathBuf>,
    #[arg(long, help = "Site generator program to invoke for the build")]
    pub hugo_bin: Option<String>,
    #[arg(
        long,
        help = "Config file (defaults to docfind-check.toml in the project root)"
    )]
    pub config: Option<PathBuf>,
    #[arg(long, default_value_t = false, help = "Disable colored output")]
    pub no_color: bool,
    #[arg(short, long, default_value_t = false, help = "Debug-level diagnostics")]
    pub verbose: bool,
    #[arg(short, long, default_value_t = false, help = "Only log errors")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Build,
    Json,
    Html,
    Assets,
}

impl Category {
    /// Execution order when no filter is given.
    pub const ALL: [Category; 4] = [
        Category::Build,
        Category::Json,
        Category::Html,
        Category::Assets,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Build => "build",
            Category::Json => "json",
            Category::Html => "html",
            Category::Assets => "assets",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Category::Build => "📦 Testing Hugo Build...",
            Category::Json => "📄 Testing search.json Output...",
            Category::Html => "🌐 Testing HTML Output...",
            Category::Assets => "📁 Testing Static Assets...",
        }
    }

    pub fn selected_by(self, only: Option<Category>) -> bool {
        only.map(|o| o == self).unwrap_or(true)
    }
}
