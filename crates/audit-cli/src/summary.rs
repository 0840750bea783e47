use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use audit_content::{BiasCategory, ContentFindings, RiskLevel};
use audit_map::RuleTable;
use audit_model::ScoreBand;
use audit_report::{AuditReport, ChartSeries, InsightTone};

use crate::cli::OutputFormatArg;
use crate::commands::{AnalyzeResult, DetectResult};

pub fn print_analysis(result: &AnalyzeResult) -> Result<()> {
    match result.format {
        OutputFormatArg::Json => println!("{}", result.report.to_json()?),
        OutputFormatArg::Markdown => print!("{}", result.report.to_markdown()),
        OutputFormatArg::Table => print_report_tables(&result.report),
    }
    if let Some(path) = &result.written {
        eprintln!("Report: {}", path.display());
    }
    Ok(())
}

fn print_report_tables(report: &AuditReport) {
    if let Some(source) = &report.source {
        println!("Dataset: {source}");
    }
    println!("{}", report.target_gender);
    println!("{}", report.target_age);
    println!("{}", match_table(report));
    println!("{}", insight_table(report));
    for chart in report.charts.iter().filter(|chart| !chart.is_empty()) {
        println!("{}", chart_table(chart));
    }
}

/// Gender, age and combined match counts with the overall score.
pub fn match_table(report: &AuditReport) -> Table {
    let result = &report.match_result;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Check"),
        header_cell("Matched"),
        header_cell("Percent"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Gender"),
        Cell::new(result.gender_match_count),
        Cell::new(format!("{:.1}%", result.gender_match_percent)),
    ]);
    table.add_row(vec![
        Cell::new("Age"),
        Cell::new(result.age_match_count),
        Cell::new(format!("{:.1}%", result.age_match_percent)),
    ]);
    table.add_row(vec![
        Cell::new("Both"),
        Cell::new(format!(
            "{} of {}",
            result.matched_records, result.total_records
        )),
        Cell::new(format!("{}%", result.matched_percent())),
    ]);
    table.add_row(vec![
        Cell::new("SCORE")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell(report.band.as_str()),
        Cell::new(format!("{}%", report.match_score))
            .fg(band_color(report.band))
            .add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn insight_table(report: &AuditReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Insight"),
        header_cell("Finding"),
        header_cell("Detail"),
    ]);
    apply_summary_table_style(&mut table);
    for insight in &report.insights {
        table.add_row(vec![
            Cell::new(&insight.title).fg(tone_color(insight.tone)),
            Cell::new(&insight.data),
            dim_cell(&insight.description),
        ]);
    }
    table
}

pub fn chart_table(chart: &ChartSeries) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&chart.title),
        header_cell("Count"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &chart.entries {
        let share = if chart.total == 0 {
            0.0
        } else {
            100.0 * entry.count as f64 / chart.total as f64
        };
        table.add_row(vec![
            Cell::new(&entry.label),
            Cell::new(entry.count),
            Cell::new(format!("{share:.1}%")),
        ]);
    }
    if chart.omitted > 0 {
        table.add_row(vec![
            dim_cell(format!("{} more", chart.omitted)),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    table
}

pub fn print_detection(result: &DetectResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&result.detection)?);
        return Ok(());
    }
    println!("File: {}", result.source.display());
    println!("{}", detection_table(result));
    Ok(())
}

/// One row per header: the kind it was bound to and why.
pub fn detection_table(result: &DetectResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Parameter"),
        header_cell("Pattern"),
    ]);
    apply_table_style(&mut table);
    for column in &result.columns {
        let binding = result
            .detection
            .bindings
            .iter()
            .find(|binding| &binding.column == column);
        let row = match binding {
            Some(binding) => vec![
                Cell::new(column),
                Cell::new(binding.kind.label()).fg(Color::Yellow),
                Cell::new(&binding.pattern),
            ],
            None => vec![Cell::new(column), dim_cell("generic"), dim_cell("-")],
        };
        table.add_row(row);
    }
    table
}

pub fn print_findings(findings: &ContentFindings, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(findings)?);
        return Ok(());
    }
    println!("{}", findings_table(findings));
    Ok(())
}

pub fn findings_table(findings: &ContentFindings) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Result")]);
    apply_table_style(&mut table);
    let risk = findings.risk();
    table.add_row(vec![
        Cell::new("Bias score"),
        Cell::new(format!("{}/10 ({} risk)", findings.bias.score, risk.as_str()))
            .fg(risk_color(risk)),
    ]);
    for category in BiasCategory::ALL {
        let Some(flags) = findings.bias.categories.get(&category) else {
            continue;
        };
        table.add_row(vec![Cell::new(category.label()), Cell::new(flags.join("\n"))]);
    }
    let pii = if findings.has_pii() {
        findings
            .pii
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        "No PII detected".to_string()
    };
    table.add_row(vec![Cell::new("PII"), Cell::new(pii)]);
    let harmful = if findings.has_harmful_content() {
        findings.harmful_terms.join(", ")
    } else {
        "No harmful content detected".to_string()
    };
    table.add_row(vec![Cell::new("Harmful content"), Cell::new(harmful)]);
    table
}

pub fn rules_table(rules: &RuleTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Parameter"), header_cell("Patterns")]);
    apply_table_style(&mut table);
    for rule in rules.rules() {
        table.add_row(vec![
            Cell::new(rule.kind.label()),
            Cell::new(rule.patterns.join(", ")),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Excellent => Color::Green,
        ScoreBand::Moderate => Color::Yellow,
        ScoreBand::Poor => Color::Red,
    }
}

fn tone_color(tone: InsightTone) -> Color {
    match tone {
        InsightTone::Positive => Color::Green,
        InsightTone::Warning => Color::Yellow,
        InsightTone::Negative => Color::Red,
        InsightTone::Neutral => Color::Cyan,
    }
}

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => Color::Green,
        RiskLevel::Moderate => Color::Yellow,
        RiskLevel::High => Color::Red,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
