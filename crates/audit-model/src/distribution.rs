//! Per-parameter value distributions.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::parameter::ParameterDescriptor;

/// Normalized value to occurrence count.
///
/// Keys are kept ordered so two runs over the same table produce identical
/// tables (and identical serialized output).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count for `value`.
    pub fn record(&mut self, value: impl Into<String>) {
        *self.counts.entry(value.into()).or_insert(0) += 1;
    }

    pub fn get(&self, value: &str) -> u64 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Entries sorted by count (highest first), ties by value.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| match b.1.cmp(&a.1) {
            Ordering::Equal => a.0.cmp(b.0),
            other => other,
        });
        entries
    }

    /// The `limit` most frequent values.
    pub fn top(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut ranked = self.ranked();
        ranked.truncate(limit);
        ranked
    }
}

impl FromIterator<(String, u64)> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Summary statistics over parsable age cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeSummary {
    pub min: i64,
    pub max: i64,
    /// Widened so that extreme cells cannot overflow it.
    pub sum: i128,
    pub count: u64,
    /// `sum / count`, rounded half-up.
    pub avg: i64,
}

/// Frequency table for one detected parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDistribution {
    pub descriptor: ParameterDescriptor,
    pub frequencies: FrequencyTable,
}

impl ParameterDistribution {
    pub fn new(descriptor: ParameterDescriptor) -> Self {
        Self {
            descriptor,
            frequencies: FrequencyTable::new(),
        }
    }
}
