//! Chart hints for parameter distributions.
//!
//! No rendering happens here. Each distribution gets a suggested chart kind
//! and the slice of values a front end should draw.

use serde::Serialize;

use audit_model::{ParameterDistribution, ReportOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Pie => "pie",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    pub label: String,
    pub count: u64,
}

/// Values of one distribution prepared for drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    /// Column the values came from.
    pub column: String,
    pub kind: ChartKind,
    pub entries: Vec<ChartEntry>,
    /// Sum of all counts, including values left out of `entries`.
    pub total: u64,
    /// Number of distinct values not shown.
    pub omitted: usize,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Picks a chart for a distribution.
///
/// Age buckets are drawn as a bar chart in bucket order. Other distributions
/// with at most `pie_max_values` values become pie charts; longer ones become
/// bar charts of the `top_values` most frequent values.
pub fn chart_for(distribution: &ParameterDistribution, options: &ReportOptions) -> ChartSeries {
    let frequencies = &distribution.frequencies;
    let (kind, entries) = if distribution.descriptor.kind.is_age() {
        let mut buckets: Vec<(&str, u64)> = frequencies.iter().collect();
        buckets.sort_by_key(|(label, _)| bucket_start(label));
        (ChartKind::Bar, buckets)
    } else if frequencies.len() <= options.pie_max_values {
        (ChartKind::Pie, frequencies.ranked())
    } else {
        (ChartKind::Bar, frequencies.top(options.top_values))
    };

    ChartSeries {
        title: format!("{} Distribution", distribution.descriptor.label()),
        column: distribution.descriptor.column.clone(),
        kind,
        omitted: frequencies.len() - entries.len(),
        total: frequencies.total(),
        entries: entries
            .into_iter()
            .map(|(label, count)| ChartEntry {
                label: label.to_string(),
                count,
            })
            .collect(),
    }
}

/// Charts for every distribution, in distribution order.
pub fn charts_for(
    distributions: &[ParameterDistribution],
    options: &ReportOptions,
) -> Vec<ChartSeries> {
    distributions
        .iter()
        .map(|distribution| chart_for(distribution, options))
        .collect()
}

/// Lower bound of an age bucket label such as `"30-39"` or `"-10--1"`.
fn bucket_start(label: &str) -> i64 {
    let split = label
        .char_indices()
        .skip(1)
        .find(|(_, ch)| *ch == '-')
        .map_or(label.len(), |(idx, _)| idx);
    label[..split].parse().unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use audit_model::{FrequencyTable, ParameterDescriptor, SensitiveKind};

    use super::*;

    fn distribution(
        descriptor: ParameterDescriptor,
        values: &[(&str, u64)],
    ) -> ParameterDistribution {
        ParameterDistribution {
            descriptor,
            frequencies: values
                .iter()
                .map(|(value, count)| ((*value).to_string(), *count))
                .collect::<FrequencyTable>(),
        }
    }

    #[test]
    fn age_buckets_are_bars_in_numeric_order() {
        let ages = distribution(
            ParameterDescriptor::sensitive(SensitiveKind::Age, "age"),
            &[("100-109", 1), ("20-29", 4), ("0-9", 2), ("-10--1", 1)],
        );

        let chart = chart_for(&ages, &ReportOptions::default());

        assert_eq!(chart.kind, ChartKind::Bar);
        let labels: Vec<&str> = chart.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["-10--1", "0-9", "20-29", "100-109"]);
        assert_eq!(chart.title, "Age Distribution");
    }

    #[test]
    fn short_categorical_distribution_is_a_pie() {
        let gender = distribution(
            ParameterDescriptor::sensitive(SensitiveKind::Gender, "Sex"),
            &[("female", 3), ("male", 5)],
        );

        let chart = chart_for(&gender, &ReportOptions::default());

        assert_eq!(chart.kind, ChartKind::Pie);
        assert_eq!(chart.entries[0].label, "male");
        assert_eq!(chart.total, 8);
        assert_eq!(chart.omitted, 0);
        assert_eq!(chart.column, "Sex");
    }

    #[test]
    fn long_distribution_keeps_top_values() {
        let cities: Vec<(String, u64)> = (0..9).map(|n| (format!("city{n}"), n + 1)).collect();
        let refs: Vec<(&str, u64)> = cities.iter().map(|(c, n)| (c.as_str(), *n)).collect();
        let location = distribution(
            ParameterDescriptor::sensitive(SensitiveKind::Location, "city"),
            &refs,
        );

        let chart = chart_for(&location, &ReportOptions::default());

        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.entries.len(), 5);
        assert_eq!(chart.entries[0].label, "city8");
        assert_eq!(chart.omitted, 4);
        assert_eq!(chart.total, 45);
    }
}
