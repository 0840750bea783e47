//! Target audience specification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Gender constraint of a target audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderTarget {
    Male,
    Female,
    /// No gender constraint.
    #[default]
    Both,
}

impl GenderTarget {
    /// Value compared against lower-cased gender cells.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Both => "both",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Both => "Male & Female",
        }
    }
}

impl fmt::Display for GenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenderTarget {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "both" => Ok(Self::Both),
            _ => Err(ModelError::UnknownGender(s.to_string())),
        }
    }
}

/// Age bucket shortcuts offered next to the explicit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudiencePreset {
    /// 0-17
    Kids,
    /// 18-64
    Adults,
    /// 65-100
    Seniors,
}

impl AudiencePreset {
    /// Inclusive `(min, max)` age range.
    #[must_use]
    pub fn age_range(self) -> (i64, i64) {
        match self {
            Self::Kids => (0, 17),
            Self::Adults => (18, 64),
            Self::Seniors => (65, 100),
        }
    }
}

impl FromStr for AudiencePreset {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kids" => Ok(Self::Kids),
            "adults" => Ok(Self::Adults),
            "seniors" => Ok(Self::Seniors),
            _ => Err(ModelError::UnknownPreset(s.to_string())),
        }
    }
}

/// The audience a dataset is audited against.
///
/// `age_min > age_max` is accepted; no record can then satisfy the age check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetSpec {
    pub gender: GenderTarget,
    pub age_min: i64,
    pub age_max: i64,
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self {
            gender: GenderTarget::Both,
            age_min: 18,
            age_max: 65,
        }
    }
}

impl TargetSpec {
    pub fn new(gender: GenderTarget, age_min: i64, age_max: i64) -> Self {
        Self {
            gender,
            age_min,
            age_max,
        }
    }

    /// Replaces the age range with a preset's range.
    #[must_use]
    pub fn with_preset(mut self, preset: AudiencePreset) -> Self {
        let (min, max) = preset.age_range();
        self.age_min = min;
        self.age_max = max;
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: GenderTarget) -> Self {
        self.gender = gender;
        self
    }

    pub fn contains_age(&self, age: i64) -> bool {
        age >= self.age_min && age <= self.age_max
    }

    pub fn gender_description(&self) -> String {
        format!("Gender: {}", self.gender.label())
    }

    pub fn age_description(&self) -> String {
        format!("Age Range: {}-{}", self.age_min, self.age_max)
    }
}
