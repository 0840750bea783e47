use std::fs;
use std::io::Cursor;

use audit_ingest::{IngestError, parse_table, read_table, read_table_from_reader};

#[test]
fn reads_table_from_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("audience.csv");
    fs::write(&path, "age, Gender ,location\n25,Male,Paris\n70, Female ,Lyon\n")
        .expect("write file");

    let table = read_table(&path).expect("read csv");
    assert_eq!(table.columns(), ["age", "Gender", "location"]);
    assert_eq!(table.len(), 2);
    let second = &table.records()[1];
    assert_eq!(second.get("age"), Some("70"));
    assert_eq!(second.get("Gender"), Some("Female"));
    assert_eq!(second.get("location"), Some("Lyon"));
}

#[test]
fn blank_lines_are_dropped_before_the_header() {
    let table = parse_table("\n\n  \nage,gender\n\n25,Male\n\n").expect("parse");
    assert_eq!(table.columns(), ["age", "gender"]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.records()[0].get("gender"), Some("Male"));
}

#[test]
fn short_rows_are_padded_and_extra_cells_ignored() {
    let table = parse_table("a,b,c\n1\n1,2,3,4,5\n").expect("parse");
    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[0].values(), ["1", "", ""]);
    assert_eq!(table.records()[1].values(), ["1", "2", "3"]);
}

#[test]
fn quotes_are_not_interpreted() {
    let table = parse_table("name,city\n\"Doe, Jane\",Paris\n").expect("parse");
    let record = &table.records()[0];
    assert_eq!(record.get("name"), Some("\"Doe"));
    assert_eq!(record.get("city"), Some("Jane\""));
}

#[test]
fn crlf_line_endings_are_accepted() {
    let table = parse_table("age,gender\r\n25,Male\r\n31,Female\r\n").expect("parse");
    assert_eq!(table.columns(), ["age", "gender"]);
    assert_eq!(table.records()[1].get("gender"), Some("Female"));
}

#[test]
fn header_only_input_is_an_empty_table() {
    let table = parse_table("age,gender\n").expect("parse");
    assert_eq!(table.columns(), ["age", "gender"]);
    assert!(table.is_empty());
}

#[test]
fn empty_input_is_an_empty_table() {
    let table = parse_table("").expect("parse");
    assert!(table.columns().is_empty());
    assert!(table.is_empty());
}

#[test]
fn header_case_is_preserved() {
    let table = parse_table("Years,SEX,City\n40,m,Rome\n").expect("parse");
    assert_eq!(table.columns(), ["Years", "SEX", "City"]);
}

#[test]
fn invalid_utf8_is_a_read_error() {
    let bytes: Vec<u8> = b"age,gender\n25,\xff\xfe\n".to_vec();
    let error = read_table_from_reader(Cursor::new(bytes)).expect_err("invalid utf-8");
    assert!(matches!(error, IngestError::Read { .. }));
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let error = read_table(&dir.path().join("missing.csv")).expect_err("missing file");
    assert!(matches!(error, IngestError::Open { .. }));
    assert!(error.to_string().contains("missing.csv"));
}
