use crate::cli::Category;
use crate::domain::models::{CategoryReport, RunSummary};
use colored::{Color, Colorize};
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════";

/// Console report. Colors are applied only when `color` is set.
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn line(&mut self, text: &str, color: Color) -> anyhow::Result<()> {
        let painted = self.paint(text, color);
        writeln!(self.out, "{}", painted)?;
        Ok(())
    }

    pub fn banner(&mut self) -> anyhow::Result<()> {
        self.line("╔═══════════════════════════════════════╗", Color::Cyan)?;
        self.line("║   DocFind Hugo Module - Test Suite    ║", Color::Cyan)?;
        self.line("╚═══════════════════════════════════════╝", Color::Cyan)
    }

    /// Printed before the category runs, so a slow build shows what it is doing.
    pub fn heading(&mut self, category: Category) -> anyhow::Result<()> {
        self.line(&format!("\n{}", category.heading()), Color::Cyan)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn results(&mut self, report: &CategoryReport) -> anyhow::Result<()> {
        for result in &report.results {
            match &result.failure {
                None => self.line(&format!("  ✓ {}", result.label), Color::Green)?,
                Some(reason) => {
                    self.line(&format!("  ✗ {}", result.label), Color::Red)?;
                    self.line(&format!("    → {}", reason), Color::Yellow)?;
                }
            }
        }
        Ok(())
    }

    pub fn summary(&mut self, summary: &RunSummary) -> anyhow::Result<()> {
        self.line(&format!("\n{}", RULE), Color::Cyan)?;
        if summary.failed == 0 {
            self.line(
                &format!("\n✓ All {} tests passed!", summary.passed),
                Color::Green,
            )?;
        } else {
            self.line(
                &format!("\n✗ {} of {} tests failed", summary.failed, summary.total()),
                Color::Red,
            )?;
        }
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
