use crate::domain::models::CheckResult;
use anyhow::Context;
use std::path::Path;
use std::process::Command;

const BUILD_LABEL: &str = "Hugo build";

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Command failed: {command} ({status})\n{output}")]
    Failed {
        command: String,
        status: String,
        output: String,
    },
}

/// Runs the site build in a site directory and blocks until it exits.
pub trait BuildRunner {
    fn run(&self, site_dir: &Path) -> Result<(), BuildError>;
}

/// Runs the generator as a subprocess, capturing its output.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    program: String,
    args: Vec<String>,
}

impl CommandRunner {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl BuildRunner for CommandRunner {
    fn run(&self, site_dir: &Path) -> Result<(), BuildError> {
        let command = self.command_line();
        tracing::debug!(%command, dir = %site_dir.display(), "running site build");
        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(site_dir)
            .output()
            .map_err(|source| BuildError::Spawn {
                command: command.clone(),
                source,
            })?;
        if output.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Err(BuildError::Failed {
            command,
            status: output.status.to_string(),
            output: if stderr.is_empty() { stdout } else { stderr },
        })
    }
}

/// Removes a stale output directory. A directory that is already gone is fine.
pub fn clear_output_dir(dir: &Path) -> anyhow::Result<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err).with_context(|| format!("removing {}", dir.display())),
    }
}

/// Clean build of the example site. Always yields exactly one result.
pub fn check_build(
    runner: &dyn BuildRunner,
    site_dir: &Path,
    output_dir: &Path,
) -> anyhow::Result<Vec<CheckResult>> {
    clear_output_dir(output_dir)?;

    if let Err(err) = runner.run(site_dir) {
        tracing::warn!(error = %err, "site build failed");
        return Ok(vec![CheckResult::fail(BUILD_LABEL, err.to_string())]);
    }

    if !output_dir.is_dir() {
        return Ok(vec![CheckResult::fail(
            BUILD_LABEL,
            "public/ directory not created",
        )]);
    }

    Ok(vec![CheckResult::pass("Hugo build completes without errors")])
}
