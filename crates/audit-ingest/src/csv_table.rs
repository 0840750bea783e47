//! CSV loading into [`Table`]s.
//!
//! Quotes are not interpreted: every comma separates a field and a `"` is kept
//! as an ordinary character, so a quoted comma still splits the field.
//!
//! Blank (whitespace-only) lines are dropped before the header is taken, so
//! the first non-blank line is always the header.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use audit_model::Table;

use crate::error::IngestError;

const MEMORY_ORIGIN: &str = "<memory>";

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}

fn is_blank(record: &StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(|value| value.trim().is_empty())
}

/// Parses CSV text already held in memory.
pub fn parse_table(text: &str) -> Result<Table, IngestError> {
    read_from(text.as_bytes(), MEMORY_ORIGIN)
}

/// Reads and parses a CSV file.
///
/// Fails when the file cannot be opened or is not valid UTF-8; no partial
/// table is returned in that case.
pub fn read_table(path: &Path) -> Result<Table, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_from(file, &path.display().to_string())
}

/// Parses CSV from any reader.
pub fn read_table_from_reader<R: Read>(reader: R) -> Result<Table, IngestError> {
    read_from(reader, MEMORY_ORIGIN)
}

fn read_from<R: Read>(source: R, origin: &str) -> Result<Table, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(source);

    let mut header: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::read(origin, source))?;
        if is_blank(&record) {
            continue;
        }
        if header.is_none() {
            header = Some(record.iter().map(normalize_header).collect());
            continue;
        }
        rows.push(record.iter().map(normalize_cell).collect());
    }

    let Some(columns) = header else {
        debug!(origin, "csv input has no header line");
        return Ok(Table::empty());
    };
    let mut table = Table::new(columns);
    for row in rows {
        table.push_row(row);
    }
    debug!(
        origin,
        columns = table.columns().len(),
        records = table.len(),
        "loaded csv table"
    );
    Ok(table)
}
