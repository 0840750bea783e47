//! Content classifier interface.
//!
//! A [`ContentClassifier`] turns ad copy (text or an image) into structured
//! findings. The audit pipeline only depends on this trait, so a model-backed
//! classifier can replace the keyword heuristics without touching callers.
//!
//! # Example
//!
//! ```ignore
//! use audit_content::{ContentClassifier, ContentInput, KeywordClassifier};
//!
//! let findings = KeywordClassifier::new().classify(&ContentInput::text("Call 555-123-4567"))?;
//! assert!(findings.has_pii());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::ClassifierError;

/// Material submitted for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentInput {
    Text(String),
    Image {
        /// File name, if known; only used in messages.
        name: Option<String>,
        bytes: Vec<u8>,
    },
}

impl ContentInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn image(name: Option<String>, bytes: Vec<u8>) -> Self {
        Self::Image { name, bytes }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Image { .. } => "image",
        }
    }
}

/// Bias families a classifier can flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasCategory {
    Gender,
    Age,
    StereotypicalRole,
    BenevolentSexism,
    RacialSocioeconomic,
    Ableism,
}

impl BiasCategory {
    pub const ALL: [BiasCategory; 6] = [
        BiasCategory::Gender,
        BiasCategory::Age,
        BiasCategory::StereotypicalRole,
        BiasCategory::BenevolentSexism,
        BiasCategory::RacialSocioeconomic,
        BiasCategory::Ableism,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::Age => "Age",
            Self::StereotypicalRole => "Stereotypical Role",
            Self::BenevolentSexism => "Benevolent Sexism",
            Self::RacialSocioeconomic => "Racial Socioeconomic",
            Self::Ableism => "Ableism",
        }
    }
}

impl fmt::Display for BiasCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper bound of [`BiasFindings::score`].
pub const MAX_BIAS_SCORE: u8 = 10;

/// Overall risk derived from the bias score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    /// Score 4 to 6.
    Moderate,
    /// Score 7 and above.
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            7.. => Self::High,
            4..=6 => Self::Moderate,
            _ => Self::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BiasFindings {
    /// Flags per category; categories without flags are absent.
    pub categories: BTreeMap<BiasCategory, Vec<String>>,
    /// Sum of rule weights, capped at [`MAX_BIAS_SCORE`].
    pub score: u8,
}

impl BiasFindings {
    pub fn flag(&mut self, category: BiasCategory, message: &str) {
        self.categories
            .entry(category)
            .or_default()
            .push(message.to_string());
    }

    pub fn add_score(&mut self, weight: u8) {
        self.score = self.score.saturating_add(weight).min(MAX_BIAS_SCORE);
    }

    pub fn is_biased(&self) -> bool {
        self.categories.values().any(|flags| !flags.is_empty())
    }

    pub fn risk(&self) -> RiskLevel {
        RiskLevel::from_score(self.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiKind {
    Email,
    Phone,
    CreditCard,
}

impl PiiKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::CreditCard => "Credit Card (potential)",
        }
    }
}

/// Personal data found in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PiiMatch {
    pub kind: PiiKind,
    pub value: String,
}

impl fmt::Display for PiiMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.value)
    }
}

/// Structured result of classifying one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentFindings {
    pub bias: BiasFindings,
    pub pii: Vec<PiiMatch>,
    /// Harmful terms found, in list order.
    pub harmful_terms: Vec<String>,
}

impl ContentFindings {
    pub fn has_pii(&self) -> bool {
        !self.pii.is_empty()
    }

    pub fn has_harmful_content(&self) -> bool {
        !self.harmful_terms.is_empty()
    }

    pub fn risk(&self) -> RiskLevel {
        self.bias.risk()
    }
}

/// Analyzes ad content for bias, personal data and harmful language.
pub trait ContentClassifier: Send + Sync {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Classifies one input.
    ///
    /// Classifiers return [`ClassifierError::Unsupported`] for input kinds they
    /// cannot handle.
    fn classify(&self, input: &ContentInput) -> Result<ContentFindings, ClassifierError>;
}
