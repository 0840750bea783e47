use std::fs;

use audit_core::{AnalysisSession, CoreError};
use audit_map::DetectionError;
use audit_model::{DetectionOptions, GenderTarget, SensitiveKind, TargetSpec};
use tempfile::TempDir;

const SURVEY: &str = "age,gender,city\n25,Male,Paris\n70,Female,Lyon\n";

#[test]
fn analyze_without_a_table_is_an_error() {
    let session = AnalysisSession::new();
    assert!(matches!(session.analyze(), Err(CoreError::NoTable)));
}

#[test]
fn loads_csv_file_and_analyzes_it() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("survey.csv");
    fs::write(&path, SURVEY).expect("write csv");

    let mut session =
        AnalysisSession::new().with_target(TargetSpec::new(GenderTarget::Male, 18, 65));
    let table = session.load_csv(&path).expect("load csv");
    assert_eq!(table.len(), 2);

    let analysis = session.analyze().expect("analyze");
    assert_eq!(analysis.source.as_deref(), Some(path.display().to_string().as_str()));
    assert_eq!(analysis.match_result.match_score, 50);
    assert_eq!(analysis.match_result.matched_records, 1);
}

#[test]
fn analyzing_twice_gives_identical_results() {
    let mut session = AnalysisSession::new();
    session.load_text(SURVEY).expect("parse");

    let first = session.analyze().expect("analyze");
    let second = session.analyze().expect("analyze");
    assert_eq!(first, second);
}

#[test]
fn loading_a_new_table_replaces_the_old_one() {
    let mut session = AnalysisSession::new();
    session.load_text(SURVEY).expect("parse");
    session.load_text("age\n40\n").expect("parse");

    let analysis = session.analyze().expect("analyze");
    assert_eq!(analysis.total_records, 1);
    assert_eq!(analysis.columns, vec!["age"]);
}

#[test]
fn failed_load_discards_the_stale_table() {
    let dir = TempDir::new().expect("tempdir");
    let mut session = AnalysisSession::new();
    session.load_text(SURVEY).expect("parse");

    let missing = dir.path().join("missing.csv");
    assert!(matches!(
        session.load_csv(&missing),
        Err(CoreError::Ingest(_))
    ));
    assert!(session.table().is_none());
    assert!(matches!(session.analyze(), Err(CoreError::NoTable)));
}

#[test]
fn changing_the_target_rescores_the_same_table() {
    let mut session = AnalysisSession::new();
    session.load_text(SURVEY).expect("parse");

    session.set_target(TargetSpec::new(GenderTarget::Female, 65, 100));
    let analysis = session.analyze().expect("analyze");
    assert_eq!(analysis.match_result.matched_records, 1);
    assert_eq!(analysis.match_result.match_score, 50);
    assert_eq!(session.target().gender, GenderTarget::Female);
}

#[test]
fn detection_options_extend_the_session_detector() {
    let options = DetectionOptions::new().with_extra_patterns("location", ["province"]);
    let mut session = AnalysisSession::new()
        .with_detection_options(&options)
        .expect("valid options");
    session.load_text("Province,score\nOntario,3\n").expect("parse");

    let analysis = session.analyze().expect("analyze");
    let binding = analysis
        .detection
        .binding(SensitiveKind::Location)
        .expect("province bound");
    assert_eq!(binding.column, "Province");
}

#[test]
fn invalid_detection_options_are_reported() {
    let options = DetectionOptions::new().with_extra_patterns("shoe_size", ["eu"]);
    let error = AnalysisSession::new()
        .with_detection_options(&options)
        .expect_err("unknown kind");
    assert!(matches!(
        error,
        CoreError::Detection(DetectionError::UnknownKind(_))
    ));
}

#[test]
fn analysis_serializes_to_json() {
    let mut session = AnalysisSession::new();
    session.load_text(SURVEY).expect("parse");

    let json = serde_json::to_value(session.analyze().expect("analyze")).expect("serialize");
    assert_eq!(json["total_records"], 2);
    assert_eq!(json["match_result"]["match_score"], 70);
    assert_eq!(json["distributions"][0]["descriptor"]["kind"]["sensitive"], "age");
    assert_eq!(json["distributions"][0]["frequencies"]["20-29"], 1);
    assert_eq!(json["target"]["gender"], "both");
}
