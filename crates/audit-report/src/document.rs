//! The audit report document and its Markdown/JSON renderings.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use audit_core::Analysis;
use audit_model::{AgeSummary, MatchResult, ReportOptions, ScoreBand};

use crate::chart::{ChartSeries, charts_for};
use crate::error::{ReportError, Result};
use crate::insight::{Insight, generate_insights};

/// Report title.
pub const REPORT_TITLE: &str = "Ad Targeting Match Report";

/// Output format of a written report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

/// Detected column with the kind it was bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterRow {
    pub kind: String,
    pub label: String,
    pub column: String,
    pub sensitive: bool,
}

/// Everything shown in an exported report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub title: String,
    /// `YYYY-MM-DD`
    pub generated_on: String,
    pub source: Option<String>,
    pub target_gender: String,
    pub target_age: String,
    pub match_score: u32,
    pub band: ScoreBand,
    pub band_description: String,
    pub match_result: MatchResult,
    pub insights: Vec<Insight>,
    pub parameters: Vec<ParameterRow>,
    pub charts: Vec<ChartSeries>,
    pub age_summary: Option<AgeSummary>,
}

impl AuditReport {
    /// Builds the report for an analysis.
    ///
    /// The generation date is passed in so reports are reproducible.
    pub fn build(analysis: &Analysis, options: &ReportOptions, generated_on: NaiveDate) -> Self {
        let result = analysis.match_result;
        let band = result.band();
        Self {
            title: REPORT_TITLE.to_string(),
            generated_on: generated_on.format("%Y-%m-%d").to_string(),
            source: analysis.source.clone(),
            target_gender: analysis.target.gender_description(),
            target_age: analysis.target.age_description(),
            match_score: result.match_score,
            band,
            band_description: band.description().to_string(),
            match_result: result,
            insights: generate_insights(&result, &analysis.target),
            parameters: analysis
                .descriptors
                .iter()
                .map(|descriptor| ParameterRow {
                    kind: descriptor.kind.to_string(),
                    label: descriptor.label().to_string(),
                    column: descriptor.column.clone(),
                    sensitive: descriptor.kind.sensitive().is_some(),
                })
                .collect(),
            charts: charts_for(&analysis.distributions, options),
            age_summary: analysis.age_summary,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the report as a Markdown document.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_markdown(&mut out);
        out
    }

    fn write_markdown(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "# {}", self.title)?;
        writeln!(out)?;
        writeln!(out, "Generated on: {}", self.generated_on)?;
        if let Some(source) = &self.source {
            writeln!(out, "Source: {source}")?;
        }
        writeln!(out)?;

        writeln!(out, "## Your Target Audience")?;
        writeln!(out)?;
        writeln!(out, "- {}", self.target_gender)?;
        writeln!(out, "- {}", self.target_age)?;
        writeln!(out)?;

        writeln!(out, "## Overall Match Score: {}%", self.match_score)?;
        writeln!(out)?;
        writeln!(out, "{}", self.band_description)?;
        writeln!(out)?;
        writeln!(out, "| Check | Records | Percent |")?;
        writeln!(out, "|---|---:|---:|")?;
        let result = &self.match_result;
        writeln!(
            out,
            "| Gender | {} | {:.1}% |",
            result.gender_match_count, result.gender_match_percent
        )?;
        writeln!(
            out,
            "| Age | {} | {:.1}% |",
            result.age_match_count, result.age_match_percent
        )?;
        writeln!(
            out,
            "| Both | {} of {} | {}% |",
            result.matched_records,
            result.total_records,
            result.matched_percent()
        )?;
        writeln!(out)?;

        writeln!(out, "## Detailed Insights")?;
        writeln!(out)?;
        for insight in &self.insights {
            writeln!(out, "### {} ({})", insight.title, insight.tone.as_str())?;
            writeln!(out)?;
            writeln!(out, "{}", insight.data)?;
            writeln!(out)?;
            writeln!(out, "_{}_", insight.description)?;
            writeln!(out)?;
        }

        writeln!(out, "## Detected Parameters")?;
        writeln!(out)?;
        if self.parameters.is_empty() {
            writeln!(out, "No columns found.")?;
        } else {
            writeln!(out, "| Parameter | Column | Sensitive |")?;
            writeln!(out, "|---|---|---|")?;
            for row in &self.parameters {
                let sensitive = if row.sensitive { "yes" } else { "no" };
                writeln!(
                    out,
                    "| {} | {} | {} |",
                    escape_cell(&row.label),
                    escape_cell(&row.column),
                    sensitive
                )?;
            }
        }
        writeln!(out)?;

        if let Some(summary) = &self.age_summary {
            writeln!(out, "## Age Summary")?;
            writeln!(out)?;
            writeln!(
                out,
                "{} parsable ages, min {}, max {}, average {}",
                summary.count, summary.min, summary.max, summary.avg
            )?;
            writeln!(out)?;
        }

        for chart in self.charts.iter().filter(|chart| !chart.is_empty()) {
            writeln!(out, "## {} ({} chart)", chart.title, chart.kind.as_str())?;
            writeln!(out)?;
            writeln!(out, "| Value | Count |")?;
            writeln!(out, "|---|---:|")?;
            for entry in &chart.entries {
                writeln!(out, "| {} | {} |", escape_cell(&entry.label), entry.count)?;
            }
            if chart.omitted > 0 {
                writeln!(out)?;
                writeln!(out, "{} more values not shown.", chart.omitted)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Renders the report in `format`.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Markdown => Ok(self.to_markdown()),
            ReportFormat::Json => self.to_json(),
        }
    }
}

/// Escapes pipes so a cell value cannot split a Markdown table row.
fn escape_cell(value: &str) -> Cow<'_, str> {
    if value.contains('|') {
        Cow::Owned(value.replace('|', "\\|"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Writes a rendered report to `path`, creating parent directories.
pub fn write_report(report: &AuditReport, path: &Path, format: ReportFormat) -> Result<PathBuf> {
    let contents = report.render(format)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), format = format.extension(), "wrote report");
    Ok(path.to_path_buf())
}
