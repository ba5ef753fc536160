use crate::domain::models::Precondition;
use anyhow::Context;
use std::path::Path;

pub fn require_file(path: &Path, name: &str, hint: &str) -> Precondition<()> {
    if path.is_file() {
        Precondition::holds(format!("{} exists", name), ())
    } else {
        Precondition::broken(
            format!("{} exists", name),
            format!("File not found. {}", hint),
        )
    }
}

pub fn require_dir(path: &Path, name: &str, hint: &str) -> Precondition<()> {
    if path.is_dir() {
        Precondition::holds(format!("{} directory exists", name), ())
    } else {
        Precondition::broken(
            format!("{} exists", name),
            format!("Directory not found. {}", hint),
        )
    }
}

/// Reads an artifact known to exist. Failure here is an environment fault;
/// content problems such as bad encoding are left to the caller.
pub fn read_bytes(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("reading {}", path.display()))
}

/// Text of an artifact with invalid UTF-8 replaced, never rejected.
pub fn read_text_lossy(path: &Path) -> anyhow::Result<String> {
    Ok(String::from_utf8_lossy(&read_bytes(path)?).into_owned())
}

/// Size of a file in kilobytes, one decimal.
pub fn size_kb(path: &Path) -> anyhow::Result<String> {
    let meta = std::fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
    Ok(format!("{:.1} KB", meta.len() as f64 / 1024.0))
}
