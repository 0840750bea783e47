use audit_core::{aggregate, analyze_table, score_matches};
use audit_map::{ParameterDetector, detect_parameters};
use audit_model::{
    GenderTarget, ParameterDescriptor, ParameterKind, ScoreBand, SensitiveKind, Table, TargetSpec,
};

fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
    Table::from_rows(
        columns.iter().copied(),
        rows.iter().map(|row| row.iter().copied()),
    )
}

fn age_gender() -> Vec<ParameterDescriptor> {
    vec![
        ParameterDescriptor::sensitive(SensitiveKind::Age, "age"),
        ParameterDescriptor::sensitive(SensitiveKind::Gender, "gender"),
    ]
}

#[test]
fn one_of_two_records_matches_male_adults() {
    let table = table(&["age", "gender"], &[&["25", "Male"], &["70", "Female"]]);
    let target = TargetSpec::new(GenderTarget::Male, 18, 65);

    let result = score_matches(&table, &age_gender(), &target);

    assert_eq!(result.total_records, 2);
    assert_eq!(result.gender_match_count, 1);
    assert_eq!(result.age_match_count, 1);
    assert_eq!(result.matched_records, 1);
    assert_eq!(result.gender_match_percent, 50.0);
    assert_eq!(result.age_match_percent, 50.0);
    assert_eq!(result.match_score, 50);
    assert_eq!(result.band(), ScoreBand::Moderate);
}

#[test]
fn empty_table_scores_zero_without_dividing() {
    let table = table(&["age", "gender"], &[]);

    let result = score_matches(&table, &age_gender(), &TargetSpec::default());

    assert_eq!(result.total_records, 0);
    assert_eq!(result.gender_match_percent, 0.0);
    assert_eq!(result.age_match_percent, 0.0);
    assert_eq!(result.match_score, 0);
    assert_eq!(result.matched_percent(), 0);
    assert_eq!(result.band(), ScoreBand::Poor);
}

#[test]
fn synonym_headers_are_all_bound() {
    let headers = vec!["Years".to_string(), "Sex".to_string(), "City".to_string()];
    let descriptors = detect_parameters(&headers);

    assert_eq!(
        descriptors,
        vec![
            ParameterDescriptor::sensitive(SensitiveKind::Age, "Years"),
            ParameterDescriptor::sensitive(SensitiveKind::Gender, "Sex"),
            ParameterDescriptor::sensitive(SensitiveKind::Location, "City"),
        ]
    );
}

#[test]
fn unparsable_age_reads_as_zero_but_is_left_out_of_summary() {
    let table = table(&["age"], &[&["abc"], &["40"]]);
    let descriptors = vec![ParameterDescriptor::sensitive(SensitiveKind::Age, "age")];

    let aggregation = aggregate(&table, &descriptors);
    let summary = aggregation.age_summary.expect("one parsable age");
    assert_eq!(summary.count, 1);
    assert_eq!(summary.min, 40);
    assert_eq!(summary.max, 40);
    assert_eq!(summary.avg, 40);

    let ages = &aggregation.distributions[0].frequencies;
    assert_eq!(ages.get("0-9"), 1);
    assert_eq!(ages.get("40-49"), 1);

    let result = score_matches(&table, &descriptors, &TargetSpec::new(GenderTarget::Both, 1, 99));
    assert_eq!(result.age_match_count, 1);

    let result = score_matches(&table, &descriptors, &TargetSpec::new(GenderTarget::Both, 0, 99));
    assert_eq!(result.age_match_count, 2);
}

#[test]
fn ages_in_the_same_decade_share_a_bucket() {
    let table = table(&["age"], &[&["20"], &["29"]]);
    let descriptors = vec![ParameterDescriptor::sensitive(SensitiveKind::Age, "age")];

    let aggregation = aggregate(&table, &descriptors);

    let ages = &aggregation.distributions[0].frequencies;
    assert_eq!(ages.len(), 1);
    assert_eq!(ages.get("20-29"), 2);
    let summary = aggregation.age_summary.expect("ages parsed");
    assert_eq!((summary.min, summary.max, summary.sum), (20, 29, 49));
    assert_eq!(summary.avg, 25);
}

#[test]
fn categorical_values_are_counted_lower_cased_and_empty_cells_skipped() {
    let table = table(
        &["gender", "Hobby"],
        &[&["Male", "Chess"], &["MALE", ""], &["female", "chess"], &["", "Golf"]],
    );
    let descriptors = vec![
        ParameterDescriptor::sensitive(SensitiveKind::Gender, "gender"),
        ParameterDescriptor::generic("Hobby"),
    ];

    let aggregation = aggregate(&table, &descriptors);

    let gender = aggregation
        .distribution(&ParameterKind::Sensitive(SensitiveKind::Gender))
        .expect("gender distribution");
    assert_eq!(gender.frequencies.get("male"), 2);
    assert_eq!(gender.frequencies.get("female"), 1);
    assert_eq!(gender.frequencies.total(), 3);

    let hobby = aggregation
        .distribution(&ParameterKind::Generic("Hobby".to_string()))
        .expect("hobby distribution");
    assert_eq!(hobby.frequencies.get("chess"), 2);
    assert_eq!(hobby.frequencies.get("golf"), 1);
    assert!(aggregation.age_summary.is_none());
}

#[test]
fn descriptor_for_missing_column_yields_an_empty_distribution() {
    let table = table(&["gender"], &[&["male"]]);
    let descriptors = vec![ParameterDescriptor::sensitive(SensitiveKind::Age, "age")];

    let aggregation = aggregate(&table, &descriptors);
    assert!(aggregation.distributions[0].frequencies.is_empty());

    // The age descriptor exists, so its empty cells read as 0.
    let result = score_matches(&table, &descriptors, &TargetSpec::default());
    assert_eq!(result.age_match_count, 0);
}

#[test]
fn inverted_age_range_matches_nobody() {
    let table = table(&["age", "gender"], &[&["30", "male"], &["40", "female"]]);
    let target = TargetSpec::new(GenderTarget::Both, 65, 18);

    let result = score_matches(&table, &age_gender(), &target);

    assert_eq!(result.age_match_percent, 0.0);
    assert_eq!(result.gender_match_percent, 100.0);
    assert_eq!(result.match_score, 40);
}

#[test]
fn without_sensitive_columns_every_record_matches() {
    let table = table(&["product", "score"], &[&["a", "1"], &["b", "2"]]);
    let analysis = analyze_table(
        &table,
        &ParameterDetector::builtin(),
        &TargetSpec::new(GenderTarget::Female, 18, 30),
    );

    assert!(analysis.detection.has_no_sensitive());
    assert_eq!(analysis.match_result.matched_records, 2);
    assert_eq!(analysis.match_result.match_score, 100);
    assert_eq!(analysis.distributions.len(), 2);
}

#[test]
fn both_genders_skips_the_gender_cell() {
    let table = table(&["age", "gender"], &[&["30", "unknown"], &["31", ""]]);

    let result = score_matches(&table, &age_gender(), &TargetSpec::default());

    assert_eq!(result.gender_match_count, 2);
    assert_eq!(result.match_score, 100);
    assert_eq!(result.band(), ScoreBand::Excellent);
}

#[test]
fn gender_cells_compare_case_insensitively() {
    let table = table(&["age", "gender"], &[&["30", "FEMALE"], &["31", "Female "]]);
    let target = TargetSpec::new(GenderTarget::Female, 18, 65);

    let result = score_matches(&table, &age_gender(), &target);

    // Cells are not trimmed by the scorer; the loader trims them.
    assert_eq!(result.gender_match_count, 1);
}

#[test]
fn analysis_reports_columns_and_detection() {
    let table = table(
        &["Years", "Sex", "City", "notes"],
        &[&["34", "male", "Paris", "x"], &["67", "female", "Lyon", ""]],
    );

    let analysis = analyze_table(&table, &ParameterDetector::builtin(), &TargetSpec::default());

    assert_eq!(analysis.total_records, 2);
    assert_eq!(analysis.columns, vec!["Years", "Sex", "City", "notes"]);
    assert_eq!(analysis.descriptors.len(), 4);
    assert_eq!(analysis.detection.generic_columns, vec!["notes"]);
    assert_eq!(analysis.match_result.age_match_count, 1);
    // 100 * 0.4 + 50 * 0.6
    assert_eq!(analysis.match_result.match_score, 70);
    let summary = analysis.age_summary.expect("ages parsed");
    assert_eq!(summary.avg, 51);
}

#[test]
fn weighted_score_halfway_between_integers_rounds_up() {
    let table = table(
        &["age", "gender"],
        &[
            &["25", "Male"],
            &["30", "Male"],
            &["40", "Male"],
            &["70", "Male"],
            &["80", "Male"],
            &["90", "Female"],
            &["10", "Female"],
            &["5", "Female"],
        ],
    );

    let result = score_matches(&table, &age_gender(), &TargetSpec::new(GenderTarget::Male, 18, 65));

    assert_eq!(result.gender_match_percent, 62.5);
    assert_eq!(result.age_match_percent, 37.5);
    // 62.5 * 0.4 + 37.5 * 0.6 = 47.5
    assert_eq!(result.match_score, 48);
}

#[test]
fn ages_at_the_top_of_the_integer_range_get_their_own_bucket() {
    let table = table(&["age"], &[&["9223372036854775807"], &["-9223372036854775807"]]);
    let descriptors = vec![ParameterDescriptor::sensitive(SensitiveKind::Age, "age")];

    let aggregation = aggregate(&table, &descriptors);

    let ages = &aggregation.distributions[0].frequencies;
    assert_eq!(ages.get("9223372036854775800-9223372036854775809"), 1);
    assert_eq!(ages.get("-9223372036854775810--9223372036854775801"), 1);
    let summary = aggregation.age_summary.expect("ages parsed");
    assert_eq!(summary.sum, 0);
    assert_eq!(summary.avg, 0);
}

#[test]
fn age_summary_average_stays_within_extreme_bounds() {
    let table = table(&["age"], &[&["9223372036854775000"], &["9223372036854775000"]]);
    let descriptors = vec![ParameterDescriptor::sensitive(SensitiveKind::Age, "age")];

    let summary = aggregate(&table, &descriptors)
        .age_summary
        .expect("ages parsed");

    assert_eq!(summary.count, 2);
    assert_eq!(summary.sum, 2 * 9_223_372_036_854_775_000_i128);
    assert_eq!(summary.min, 9_223_372_036_854_775_000);
    assert_eq!(summary.avg, summary.min);
    assert!(summary.min <= summary.avg && summary.avg <= summary.max);
}
