use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;

use audit_cli::cli::{AnalyzeArgs, Cli, Command, ContentArgs, DetectArgs, OutputFormatArg};
use audit_cli::commands::{
    resolve_report_options, resolve_target, run_analyze, run_content, run_detect, run_parameters,
};
use audit_cli::summary::{detection_table, findings_table, match_table, rules_table};
use audit_model::{AuditOptions, GenderTarget, ReportOptions, TargetSpec};

const SURVEY: &str = "Years,Sex,City,notes\n25,Male,Paris,a\n70,Female,Lyon,b\n34,male,Paris,\n";

fn write_csv(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("survey.csv");
    fs::write(&path, contents).expect("write csv");
    path
}

fn analyze_args(csv: &Path, extra: &[&str]) -> AnalyzeArgs {
    let mut argv = vec!["audience-audit", "analyze", csv.to_str().expect("utf-8 path")];
    argv.extend_from_slice(extra);
    match Cli::try_parse_from(argv).expect("valid arguments").command {
        Command::Analyze(args) => args,
        _ => panic!("expected analyze"),
    }
}

#[test]
fn analyze_flags_parse() {
    let args = analyze_args(
        Path::new("data.csv"),
        &["--gender", "female", "--age-min", "20", "--format", "json", "--top", "3"],
    );

    assert_eq!(args.csv, PathBuf::from("data.csv"));
    assert_eq!(args.age_min, Some(20));
    assert_eq!(args.format, OutputFormatArg::Json);
    assert_eq!(args.top, Some(3));
}

#[test]
fn content_requires_text_or_image() {
    assert!(Cli::try_parse_from(["audience-audit", "content"]).is_err());
    assert!(Cli::try_parse_from(["audience-audit", "content", "--text", "hi"]).is_ok());
}

#[test]
fn command_line_overrides_configured_target() {
    let configured = TargetSpec::new(GenderTarget::Female, 30, 40);

    let args = analyze_args(Path::new("a.csv"), &["--age-max", "50"]);
    assert_eq!(
        resolve_target(&args, configured),
        TargetSpec::new(GenderTarget::Female, 30, 50)
    );

    let args = analyze_args(
        Path::new("a.csv"),
        &["--gender", "male", "--age-min", "1", "--audience", "seniors"],
    );
    assert_eq!(
        resolve_target(&args, configured),
        TargetSpec::new(GenderTarget::Male, 65, 100)
    );
}

#[test]
fn top_flag_overrides_report_options() {
    let args = analyze_args(Path::new("a.csv"), &["--top", "2"]);
    let options = resolve_report_options(&args, &ReportOptions::default());
    assert_eq!(options.top_values, 2);
    assert_eq!(options.pie_max_values, ReportOptions::default().pie_max_values);
}

#[test]
fn analyze_scores_file_and_writes_json_report() {
    let dir = TempDir::new().expect("tempdir");
    let csv = write_csv(&dir, SURVEY);
    let output = dir.path().join("reports").join("audit.json");
    let args = analyze_args(
        &csv,
        &[
            "--gender",
            "male",
            "--format",
            "json",
            "--output",
            output.to_str().expect("utf-8 path"),
        ],
    );

    let result = run_analyze(&args, &AuditOptions::default()).expect("analyze");

    assert_eq!(result.analysis.total_records, 3);
    assert_eq!(result.report.match_score, 67);
    assert_eq!(result.written.as_deref(), Some(output.as_path()));
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("read report")).expect("json");
    assert_eq!(json["target_gender"], "Gender: Male");
    assert_eq!(json["match_result"]["matched_records"], 2);

    let table = match_table(&result.report).to_string();
    assert!(table.contains("2 of 3"));
    assert!(table.contains("67%"));
}

#[test]
fn analyze_uses_configured_target_and_patterns() {
    let dir = TempDir::new().expect("tempdir");
    let csv = write_csv(&dir, "Province,Gender\nOntario,female\nQuebec,male\n");
    let options: AuditOptions = toml::from_str(
        "[target]\ngender = \"female\"\n\n[detection.extra_patterns]\nlocation = [\"province\"]\n",
    )
    .expect("valid config");

    let result = run_analyze(&analyze_args(&csv, &[]), &options).expect("analyze");

    assert_eq!(result.analysis.target.gender, GenderTarget::Female);
    assert_eq!(result.analysis.match_result.gender_match_count, 1);
    assert!(result.analysis.detection.generic_columns.is_empty());
}

#[test]
fn analyze_reports_missing_file() {
    let dir = TempDir::new().expect("tempdir");
    let args = analyze_args(&dir.path().join("missing.csv"), &[]);

    let error = run_analyze(&args, &AuditOptions::default()).expect_err("missing file");

    assert!(format!("{error:#}").contains("missing.csv"));
}

#[test]
fn detect_lists_bindings() {
    let dir = TempDir::new().expect("tempdir");
    let csv = write_csv(&dir, SURVEY);
    let args = DetectArgs {
        csv,
        json: true,
    };

    let result = run_detect(&args, &AuditOptions::default()).expect("detect");

    insta::assert_json_snapshot!(result.detection, @r#"
    {
      "bindings": [
        {
          "kind": "age",
          "column": "Years",
          "pattern": "year"
        },
        {
          "kind": "gender",
          "column": "Sex",
          "pattern": "sex"
        },
        {
          "kind": "location",
          "column": "City",
          "pattern": "city"
        }
      ],
      "generic_columns": [
        "notes"
      ]
    }
    "#);
    let table = detection_table(&result).to_string();
    assert!(table.contains("generic"));
}

#[test]
fn content_text_is_classified() {
    let args = ContentArgs {
        text: Some("Contact me at ads@example.com".to_string()),
        image: None,
        json: false,
    };

    let findings = run_content(&args).expect("classify");

    assert!(findings.has_pii());
    assert!(findings_table(&findings).to_string().contains("Email: ads@example.com"));
}

#[test]
fn content_image_is_unsupported() {
    let dir = TempDir::new().expect("tempdir");
    let image = dir.path().join("ad.png");
    fs::write(&image, [0x89, 0x50, 0x4e, 0x47]).expect("write image");
    let args = ContentArgs {
        text: None,
        image: Some(image),
        json: false,
    };

    let error = run_content(&args).expect_err("images unsupported");

    assert!(format!("{error:#}").contains("cannot analyze image input"));
}

#[test]
fn parameters_include_configured_patterns() {
    let options: AuditOptions =
        toml::from_str("[detection.extra_patterns]\nmarital = [\"Partner\"]\n").expect("config");

    let rules = run_parameters(&options).expect("rules");

    let table = rules_table(&rules).to_string();
    assert!(table.contains("Marital Status"));
    assert!(table.contains("partner"));
}
