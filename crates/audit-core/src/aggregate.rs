//! Per-parameter frequency tables and age statistics.

use serde::Serialize;
use tracing::debug;

use audit_model::{AgeSummary, ParameterDescriptor, ParameterDistribution, ParameterKind, Table};

use crate::age::{age_bucket, age_or_zero, parse_age};

/// Output of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregation {
    /// One distribution per descriptor, in descriptor order.
    pub distributions: Vec<ParameterDistribution>,
    /// Present when at least one age cell parsed.
    pub age_summary: Option<AgeSummary>,
}

impl Aggregation {
    pub fn distribution(&self, kind: &ParameterKind) -> Option<&ParameterDistribution> {
        self.distributions
            .iter()
            .find(|distribution| &distribution.descriptor.kind == kind)
    }
}

#[derive(Debug, Default)]
struct AgeAccumulator {
    min: Option<i64>,
    max: Option<i64>,
    sum: i128,
    count: u64,
}

impl AgeAccumulator {
    fn push(&mut self, age: i64) {
        self.min = Some(self.min.map_or(age, |min| min.min(age)));
        self.max = Some(self.max.map_or(age, |max| max.max(age)));
        self.sum += i128::from(age);
        self.count += 1;
    }

    fn finish(self) -> Option<AgeSummary> {
        let (Some(min), Some(max)) = (self.min, self.max) else {
            return None;
        };
        let count = i128::from(self.count);
        let quotient = self.sum.div_euclid(count);
        let remainder = self.sum.rem_euclid(count);
        let rounded = quotient + i128::from(2 * remainder >= count);
        // The mean lies in [min, max], and so does its half-up rounding.
        let avg = rounded.clamp(i128::from(min), i128::from(max)) as i64;
        Some(AgeSummary {
            min,
            max,
            sum: self.sum,
            count: self.count,
            avg,
        })
    }
}

/// Builds a frequency table for every descriptor in a single pass.
///
/// Empty cells and columns missing from the table are skipped. Age cells are
/// counted in decade buckets; a cell that does not parse lands in the `0-9`
/// bucket (the same value target matching uses) but is left out of the
/// [`AgeSummary`]. Every other value is counted lower-cased.
pub fn aggregate(table: &Table, descriptors: &[ParameterDescriptor]) -> Aggregation {
    let columns: Vec<Option<usize>> = descriptors
        .iter()
        .map(|descriptor| {
            table
                .columns()
                .iter()
                .position(|column| column == &descriptor.column)
        })
        .collect();
    let mut distributions: Vec<ParameterDistribution> = descriptors
        .iter()
        .cloned()
        .map(ParameterDistribution::new)
        .collect();
    let mut ages = AgeAccumulator::default();

    for record in table.records() {
        for (distribution, column) in distributions.iter_mut().zip(columns.iter().copied()) {
            let Some(cell) = column.and_then(|idx| record.value_at(idx)) else {
                continue;
            };
            if cell.is_empty() {
                continue;
            }
            if distribution.descriptor.kind.is_age() {
                if let Some(age) = parse_age(cell) {
                    ages.push(age);
                }
                distribution.frequencies.record(age_bucket(age_or_zero(cell)));
            } else {
                distribution.frequencies.record(cell.to_lowercase());
            }
        }
    }

    let age_summary = ages.finish();
    debug!(
        parameters = distributions.len(),
        records = table.len(),
        ages = age_summary.map_or(0, |summary| summary.count),
        "aggregated parameters"
    );
    Aggregation {
        distributions,
        age_summary,
    }
}
