use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::{Category, Cli};
pub use domain::models::{CategoryReport, RunSummary};

use commands::{handle_run, RunContext};
use services::build::CommandRunner;
use services::config::load_config;
use services::layout::SiteLayout;
use services::logging::{init_subscriber, Verbosity};
use services::report::Reporter;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
    if !color {
        colored::control::set_override(false);
    }
    init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet), color);

    let config = load_config(&cli)?;
    tracing::debug!(?config, "resolved configuration");

    let ctx = RunContext {
        layout: SiteLayout::new(&config.project_root, &config.site_dir),
        only: cli.only,
    };
    let runner = CommandRunner::new(config.hugo_bin, config.hugo_args);
    let mut reporter = Reporter::new(std::io::stdout().lock(), color);

    let summary = handle_run(&ctx, &runner, &mut reporter)?;
    Ok(ExitCode::from(summary.exit_code()))
}
