use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span, trace};

use audit_content::{ContentClassifier, ContentFindings, ContentInput, KeywordClassifier};
use audit_core::{Analysis, AnalysisSession};
use audit_map::{DetectionResult, RuleTable};
use audit_model::{AuditOptions, ReportOptions, TargetSpec};
use audit_report::{AuditReport, ReportFormat, write_report};

use crate::cli::{AnalyzeArgs, ContentArgs, DetectArgs, OutputFormatArg};
use crate::logging::redact_value;

/// Outcome of `analyze`.
#[derive(Debug)]
pub struct AnalyzeResult {
    pub analysis: Analysis,
    pub report: AuditReport,
    pub format: OutputFormatArg,
    /// Report file written with `--output`.
    pub written: Option<PathBuf>,
}

/// Outcome of `detect`.
#[derive(Debug)]
pub struct DetectResult {
    pub source: PathBuf,
    pub columns: Vec<String>,
    pub detection: DetectionResult,
}

/// Applies command line overrides on top of the configured target.
///
/// An `--audience` preset wins over `--age-min`/`--age-max`.
pub fn resolve_target(args: &AnalyzeArgs, configured: TargetSpec) -> TargetSpec {
    let mut target = configured;
    if let Some(gender) = args.gender {
        target.gender = gender.into();
    }
    if let Some(min) = args.age_min {
        target.age_min = min;
    }
    if let Some(max) = args.age_max {
        target.age_max = max;
    }
    if let Some(audience) = args.audience {
        target = target.with_preset(audience.into());
    }
    target
}

pub fn resolve_report_options(args: &AnalyzeArgs, configured: &ReportOptions) -> ReportOptions {
    let mut options = configured.clone();
    if let Some(top) = args.top {
        options.top_values = top;
    }
    options
}

/// File format used for `--output`.
pub fn report_format(format: OutputFormatArg) -> ReportFormat {
    match format {
        OutputFormatArg::Json => ReportFormat::Json,
        OutputFormatArg::Table | OutputFormatArg::Markdown => ReportFormat::Markdown,
    }
}

pub fn run_analyze(args: &AnalyzeArgs, options: &AuditOptions) -> Result<AnalyzeResult> {
    let span = info_span!("analyze", csv = %args.csv.display());
    let _guard = span.enter();

    let target = resolve_target(args, options.target);
    let mut session = AnalysisSession::new()
        .with_target(target)
        .with_detection_options(&options.detection)
        .context("build parameter detector")?;
    session
        .load_csv(&args.csv)
        .with_context(|| format!("load {}", args.csv.display()))?;
    let analysis = session.analyze()?;
    log_distributions(&analysis);

    let report_options = resolve_report_options(args, &options.report);
    let report = AuditReport::build(&analysis, &report_options, Local::now().date_naive());
    let written = match &args.output {
        Some(path) => Some(
            write_report(&report, path, report_format(args.format))
                .with_context(|| format!("write report {}", path.display()))?,
        ),
        None => None,
    };

    info!(
        records = analysis.total_records,
        match_score = analysis.match_result.match_score,
        "analysis complete"
    );
    Ok(AnalyzeResult {
        analysis,
        report,
        format: args.format,
        written,
    })
}

fn log_distributions(analysis: &Analysis) {
    for distribution in &analysis.distributions {
        for (value, count) in distribution.frequencies.iter() {
            trace!(
                parameter = %distribution.descriptor.kind,
                value = redact_value(value),
                count,
                "distribution value"
            );
        }
    }
}

pub fn run_detect(args: &DetectArgs, options: &AuditOptions) -> Result<DetectResult> {
    let mut session = AnalysisSession::new()
        .with_detection_options(&options.detection)
        .context("build parameter detector")?;
    let columns = session
        .load_csv(&args.csv)
        .with_context(|| format!("load {}", args.csv.display()))?
        .columns()
        .to_vec();
    let detection = session.detector().detect(&columns);
    Ok(DetectResult {
        source: args.csv.clone(),
        columns,
        detection,
    })
}

pub fn run_content(args: &ContentArgs) -> Result<ContentFindings> {
    let input = match (&args.text, &args.image) {
        (Some(text), _) => ContentInput::text(text.as_str()),
        (None, Some(path)) => {
            let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
            ContentInput::image(name, bytes)
        }
        (None, None) => anyhow::bail!("either --text or --image is required"),
    };
    if let ContentInput::Text(text) = &input {
        trace!(text = redact_value(text), "classifying text");
    }
    let classifier = KeywordClassifier::new();
    classifier
        .classify(&input)
        .with_context(|| format!("classify {} input", input.kind()))
}

pub fn run_parameters(options: &AuditOptions) -> Result<RuleTable> {
    RuleTable::with_options(&options.detection).context("build detection rules")
}
