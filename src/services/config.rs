use crate::cli::{Cli, DEFAULT_CONFIG_FILE};
use crate::domain::constants::{DEFAULT_HUGO_BIN, MINIFY_FLAG, SITE_DIR};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    Missing(PathBuf),
    #[error("reading config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// On-disk `docfind-check.toml`. Every key is optional.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub site_dir: Option<PathBuf>,
    pub hugo_bin: Option<String>,
    /// Extra Hugo arguments. `--minify` is added when absent.
    pub hugo_args: Option<Vec<String>>,
}

/// Effective settings: defaults, then the config file, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub project_root: PathBuf,
    pub site_dir: PathBuf,
    pub hugo_bin: String,
    pub hugo_args: Vec<String>,
}

pub fn load_config(cli: &Cli) -> Result<HarnessConfig, ConfigError> {
    let file = match &cli.config {
        Some(path) => {
            read_config_file(path)?.ok_or_else(|| ConfigError::Missing(path.clone()))?
        }
        None => {
            read_config_file(&cli.project_root.join(DEFAULT_CONFIG_FILE))?.unwrap_or_default()
        }
    };
    Ok(resolve(cli, file))
}

fn read_config_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(parsed))
}

fn resolve(cli: &Cli, file: ConfigFile) -> HarnessConfig {
    HarnessConfig {
        project_root: cli.project_root.clone(),
        site_dir: cli
            .site_dir
            .clone()
            .or(file.site_dir)
            .unwrap_or_else(|| PathBuf::from(SITE_DIR)),
        hugo_bin: cli
            .hugo_bin
            .clone()
            .or(file.hugo_bin)
            .unwrap_or_else(|| DEFAULT_HUGO_BIN.to_string()),
        hugo_args: with_minify(file.hugo_args.unwrap_or_default()),
    }
}

fn with_minify(mut args: Vec<String>) -> Vec<String> {
    if !args.iter().any(|a| a == MINIFY_FLAG) {
        args.push(MINIFY_FLAG.to_string());
    }
    args
}
