//! Target audience matching.

use tracing::{debug, trace};

use audit_model::{
    AGE_WEIGHT, GENDER_WEIGHT, GenderTarget, MatchResult, ParameterDescriptor, SensitiveKind,
    Table, TargetSpec, find_sensitive, percent, round_half_up,
};

use crate::age::age_or_zero;

/// Position of a sensitive column in the table.
///
/// `None` means no descriptor exists for the kind and the check always passes;
/// `Some(None)` means a descriptor exists but its column is not in the table,
/// in which case every cell reads as empty.
fn column_of(
    table: &Table,
    descriptors: &[ParameterDescriptor],
    kind: SensitiveKind,
) -> Option<Option<usize>> {
    let descriptor = find_sensitive(descriptors, kind)?;
    Some(
        table
            .columns()
            .iter()
            .position(|column| column == &descriptor.column),
    )
}

/// Scores every record against the target and returns the aggregate result.
///
/// A record matches on gender when the table has no gender parameter, the
/// target is [`GenderTarget::Both`], or its lower-cased gender cell equals
/// the target. It matches on age when the table has no age parameter or its
/// age (unparsable cells read as 0) lies in the inclusive target range.
///
/// `match_score` weighs the gender percentage at 40% and the age percentage
/// at 60%, rounded half-up. All percentages are 0 for an empty table.
pub fn score_matches(
    table: &Table,
    descriptors: &[ParameterDescriptor],
    target: &TargetSpec,
) -> MatchResult {
    let gender_column = column_of(table, descriptors, SensitiveKind::Gender);
    let age_column = column_of(table, descriptors, SensitiveKind::Age);

    let mut gender_matches = 0usize;
    let mut age_matches = 0usize;
    let mut both_matches = 0usize;

    for (row, record) in table.records().iter().enumerate() {
        let gender_match = match gender_column {
            None => true,
            Some(_) if target.gender == GenderTarget::Both => true,
            Some(column) => {
                let cell = column.and_then(|idx| record.value_at(idx)).unwrap_or("");
                cell.to_lowercase() == target.gender.as_str()
            }
        };
        let age_match = match age_column {
            None => true,
            Some(column) => {
                let cell = column.and_then(|idx| record.value_at(idx)).unwrap_or("");
                target.contains_age(age_or_zero(cell))
            }
        };
        trace!(row, gender_match, age_match, "scored record");

        if gender_match {
            gender_matches += 1;
        }
        if age_match {
            age_matches += 1;
        }
        if gender_match && age_match {
            both_matches += 1;
        }
    }

    let total = table.len();
    let gender_match_percent = percent(gender_matches, total);
    let age_match_percent = percent(age_matches, total);
    let weighted = gender_match_percent * GENDER_WEIGHT + age_match_percent * AGE_WEIGHT;
    let match_score = round_half_up(weighted).clamp(0, 100) as u32;

    debug!(
        total,
        matched = both_matches,
        gender_matches,
        age_matches,
        match_score,
        "scored target match"
    );
    MatchResult {
        total_records: total,
        matched_records: both_matches,
        gender_match_count: gender_matches,
        age_match_count: age_matches,
        gender_match_percent,
        age_match_percent,
        match_score,
    }
}
