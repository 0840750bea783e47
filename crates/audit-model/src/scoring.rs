//! Match results and score bands.

use serde::{Deserialize, Serialize};

/// Weight of the gender match percentage in the overall score.
pub const GENDER_WEIGHT: f64 = 0.4;
/// Weight of the age match percentage in the overall score.
pub const AGE_WEIGHT: f64 = 0.6;

/// Rounds to the nearest integer with halves going up (`2.5 -> 3`, `-2.5 -> -2`).
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// `100 * count / total`, or 0 for an empty population.
#[must_use]
pub fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    }
}

/// How well a dataset matches the declared target audience.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub total_records: usize,
    /// Records satisfying both the gender and the age check.
    pub matched_records: usize,
    pub gender_match_count: usize,
    pub age_match_count: usize,
    pub gender_match_percent: f64,
    pub age_match_percent: f64,
    /// Weighted score in `0..=100`.
    pub match_score: u32,
}

impl MatchResult {
    /// Result for a table without records.
    pub fn empty() -> Self {
        Self {
            total_records: 0,
            matched_records: 0,
            gender_match_count: 0,
            age_match_count: 0,
            gender_match_percent: 0.0,
            age_match_percent: 0.0,
            match_score: 0,
        }
    }

    /// Percentage of records matching both checks, rounded half-up.
    pub fn matched_percent(&self) -> i64 {
        round_half_up(percent(self.matched_records, self.total_records))
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.match_score)
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Qualitative classification of a score or percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// Below 50.
    Poor,
    /// 50 to 79.
    Moderate,
    /// 80 and above.
    Excellent,
}

impl ScoreBand {
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        Self::from_percent(f64::from(score))
    }

    /// Classifies an unrounded percentage with the same thresholds.
    #[must_use]
    pub fn from_percent(value: f64) -> Self {
        if value >= 80.0 {
            Self::Excellent
        } else if value >= 50.0 {
            Self::Moderate
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
        }
    }

    /// One-line verdict shown next to the overall score.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Excellent => {
                "Excellent match! The dataset aligns very well with your target audience."
            }
            Self::Moderate => {
                "Moderate match. Consider adjusting your targeting or finding a more suitable dataset."
            }
            Self::Poor => "Poor match. This dataset does not align well with your target audience.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_half_up(49.5), 50);
        assert_eq!(round_half_up(49.49), 49);
        assert_eq!(round_half_up(-2.5), -2);
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(50), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(49), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_percent(79.9), ScoreBand::Moderate);
    }

    #[test]
    fn percent_guards_empty_population() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(1, 4), 25.0);
    }
}
