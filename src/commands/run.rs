use crate::services::assets::check_assets;
use crate::services::build::{check_build, BuildRunner};
use crate::services::html::check_root_page;
use crate::services::layout::SiteLayout;
use crate::services::report::Reporter;
use crate::services::search_index::check_search_index;
use crate::*;
use std::io::Write;
use std::time::Instant;

/// Everything one invocation needs; nothing outlives it.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub layout: SiteLayout,
    pub only: Option<Category>,
}

pub fn run_category(
    category: Category,
    ctx: &RunContext,
    runner: &dyn BuildRunner,
) -> anyhow::Result<CategoryReport> {
    let layout = &ctx.layout;
    let results = match category {
        Category::Build => check_build(runner, layout.site_dir(), &layout.output_dir())?,
        Category::Json => check_search_index(&layout.search_index())?,
        Category::Html => check_root_page(&layout.root_page())?,
        Category::Assets => check_assets(layout)?,
    };
    Ok(CategoryReport { category, results })
}

/// Runs the selected categories in order build, json, html, assets.
pub fn handle_run<W: Write>(
    ctx: &RunContext,
    runner: &dyn BuildRunner,
    reporter: &mut Reporter<W>,
) -> anyhow::Result<RunSummary> {
    reporter.banner()?;
    let mut summary = RunSummary::default();
    for category in Category::ALL
        .into_iter()
        .filter(|c| c.selected_by(ctx.only))
    {
        reporter.heading(category)?;
        let started = Instant::now();
        let report = run_category(category, ctx, runner)?;
        tracing::debug!(
            category = category.name(),
            passed = report.passed(),
            failed = report.failed(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "category finished"
        );
        reporter.results(&report)?;
        summary.add(&report);
    }
    reporter.summary(&summary)?;
    Ok(summary)
}
