//! Report generation for audience audits.
//!
//! This crate turns an [`Analysis`](audit_core::Analysis) into output a person
//! reads:
//!
//! - **Insights**: the overall, gender and age verdicts plus a recommendation
//! - **Chart hints**: which chart suits each distribution and what it shows
//! - **Reports**: a Markdown or JSON document written to disk

mod chart;
mod document;
mod error;
mod insight;

pub use chart::{ChartEntry, ChartKind, ChartSeries, chart_for, charts_for};
pub use document::{AuditReport, ParameterRow, REPORT_TITLE, ReportFormat, write_report};
pub use error::{ReportError, Result};
pub use insight::{Insight, InsightTone, generate_insights};
