//! Plain-language insights derived from a match result.

use serde::Serialize;

use audit_model::{GenderTarget, MatchResult, ScoreBand, TargetSpec, round_half_up};

/// Visual tone of an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightTone {
    Positive,
    Warning,
    Negative,
    Neutral,
}

impl InsightTone {
    fn from_band(band: ScoreBand) -> Self {
        match band {
            ScoreBand::Excellent => Self::Positive,
            ScoreBand::Moderate => Self::Warning,
            ScoreBand::Poor => Self::Negative,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Warning => "warning",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// One finding shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub tone: InsightTone,
    pub title: String,
    /// Headline figure, e.g. "3 of 4 records (75%) ...".
    pub data: String,
    pub description: String,
}

impl Insight {
    fn new(tone: InsightTone, title: &str, data: impl Into<String>, description: &str) -> Self {
        Self {
            tone,
            title: title.to_string(),
            data: data.into(),
            description: description.to_string(),
        }
    }
}

/// Builds the four standard insights: overall match, gender, age range and a
/// recommendation.
pub fn generate_insights(result: &MatchResult, target: &TargetSpec) -> Vec<Insight> {
    let overall = result.band();
    let gender = ScoreBand::from_percent(result.gender_match_percent);
    let age = ScoreBand::from_percent(result.age_match_percent);

    let overall_description = match overall {
        ScoreBand::Excellent => "Excellent alignment with your target audience",
        ScoreBand::Moderate => "Moderate alignment - some adjustments may be needed",
        ScoreBand::Poor => "Poor alignment - consider different targeting parameters or dataset",
    };
    let gender_description = if target.gender == GenderTarget::Both {
        "You are targeting both genders"
    } else {
        match gender {
            ScoreBand::Excellent => "Strong gender match",
            ScoreBand::Moderate => "Moderate gender match",
            ScoreBand::Poor => "Weak gender match",
        }
    };
    let age_description = match age {
        ScoreBand::Excellent => "Strong age range match",
        ScoreBand::Moderate => "Moderate age range match",
        ScoreBand::Poor => "Weak age range match",
    };
    let recommendation = match overall {
        ScoreBand::Excellent => {
            "This dataset is well-suited for your campaign. Proceed with confidence."
        }
        ScoreBand::Moderate => {
            "Consider adjusting your targeting parameters or finding a more suitable dataset."
        }
        ScoreBand::Poor => {
            "This dataset is not ideal for your campaign. Strongly consider finding alternative data."
        }
    };

    vec![
        Insight::new(
            InsightTone::from_band(overall),
            "Target Audience Match",
            format!(
                "{} of {} records ({}%) match both your gender and age criteria",
                result.matched_records,
                result.total_records,
                result.matched_percent()
            ),
            overall_description,
        ),
        Insight::new(
            InsightTone::from_band(gender),
            "Gender Match",
            format!(
                "{}% match with your gender target",
                round_half_up(result.gender_match_percent)
            ),
            gender_description,
        ),
        Insight::new(
            InsightTone::from_band(age),
            "Age Range Match",
            format!(
                "{}% match with your age range ({}-{})",
                round_half_up(result.age_match_percent),
                target.age_min,
                target.age_max
            ),
            age_description,
        ),
        Insight::new(
            InsightTone::Neutral,
            "Recommendation",
            recommendation,
            "Based on your targeting criteria and dataset match",
        ),
    ]
}
