//! Deterministic keyword classifier.
//!
//! Every rule is a case-insensitive substring test over the whole text, so
//! short keywords also match inside longer words (`"he"` matches `"the"`).

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::classifier::{
    BiasCategory, BiasFindings, ContentClassifier, ContentFindings, ContentInput, PiiKind,
    PiiMatch,
};
use crate::error::ClassifierError;

const MALE_TERMS: &[&str] = &["businessman", "he", "his", "him", "gentleman"];
const FEMALE_TERMS: &[&str] = &["businesswoman", "she", "her", "lady"];
const INCLUSIVE_TERMS: &[&str] = &["person", "individual", "they", "their", "everyone"];

const OLDER_TERMS: &[&str] = &["retiree", "elderly", "senior citizen", "golden years", "pensioner"];
const YOUNGER_TERMS: &[&str] = &["youth", "millennial", "gen z", "youngster"];

const DOMESTIC_ROLE_TERMS: &[&str] = &[
    "scrub", "clean", "kitchen", "home", "dishes", "laundry", "cooking", "beauty",
];
const POWER_ROLE_TERMS: &[&str] = &[
    "tools", "cars", "garage", "finance", "business", "power", "strength", "sports",
];

const WOMEN_AUDIENCE_TERMS: &[&str] = &["especially for women", "for women"];
const SAFETY_TERMS: &[&str] = &["safety", "safe", "protection"];

const PROBLEMATIC_TERMS: &[&str] = &[
    "primitive", "backward", "exotic", "ghetto", "struggling", "poverty", "disabled", "handicap",
];
const SOCIOECONOMIC_TERMS: &[&str] = &["struggling", "poverty"];
const DISABILITY_TERMS: &[&str] = &["disabled", "handicap"];

/// Terms reported as harmful content.
pub const HARMFUL_TERMS: &[&str] = &[
    "kill",
    "hate",
    "destroy",
    "bomb",
    "attack",
    "violence",
    "exploit",
    "manipulate",
    "deceive",
    "fraud",
    "illegal",
    "scam",
    "cheat",
];

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("Invalid email regex")
});

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:\d{3}[-.\s]??\d{3}[-.\s]??\d{4}|\(\d{3}\)\s*\d{3}[-.\s]??\d{4})\b")
        .expect("Invalid phone regex")
});

static CREDIT_CARD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:\d{4}[- ]){3}\d{4}\b").expect("Invalid credit card regex"));

fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}

/// Keyword and regular expression heuristics for text ad copy.
///
/// Images are rejected with [`ClassifierError::Unsupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Scores `text` against the bias rules.
    pub fn bias(&self, text: &str) -> BiasFindings {
        let text = text.to_lowercase();
        let mut findings = BiasFindings::default();

        let male = contains_any(&text, MALE_TERMS);
        let female = contains_any(&text, FEMALE_TERMS);
        if !contains_any(&text, INCLUSIVE_TERMS) && male != female {
            let message = if male {
                "Male-centric language detected"
            } else {
                "Female-centric language detected"
            };
            findings.flag(BiasCategory::Gender, message);
            findings.add_score(1);
        }

        if contains_any(&text, OLDER_TERMS) {
            findings.flag(BiasCategory::Age, "Targeting only older demographic");
            findings.add_score(1);
        }
        if contains_any(&text, YOUNGER_TERMS) {
            findings.flag(BiasCategory::Age, "Targeting only younger demographic");
            findings.add_score(1);
        }

        if contains_any(&text, DOMESTIC_ROLE_TERMS) {
            findings.flag(
                BiasCategory::StereotypicalRole,
                "Linking women to domestic/beauty roles",
            );
            findings.add_score(2);
        }
        if contains_any(&text, POWER_ROLE_TERMS) {
            findings.flag(
                BiasCategory::StereotypicalRole,
                "Linking men to power/tech/sports roles",
            );
            findings.add_score(2);
        }

        if contains_any(&text, WOMEN_AUDIENCE_TERMS) && contains_any(&text, SAFETY_TERMS) {
            findings.flag(
                BiasCategory::BenevolentSexism,
                "Implies women need special safety/protection",
            );
            findings.add_score(4);
        }

        if contains_any(&text, PROBLEMATIC_TERMS) {
            if contains_any(&text, SOCIOECONOMIC_TERMS) {
                findings.flag(
                    BiasCategory::RacialSocioeconomic,
                    "Problematic socio-economic language",
                );
            }
            if contains_any(&text, DISABILITY_TERMS) {
                findings.flag(BiasCategory::Ableism, "Problematic disability language");
            } else {
                findings.flag(
                    BiasCategory::RacialSocioeconomic,
                    "Problematic language detected",
                );
            }
            findings.add_score(3);
        }

        findings
    }

    /// Finds e-mail addresses, phone numbers and card-like numbers, grouped
    /// by kind in that order.
    pub fn pii(&self, text: &str) -> Vec<PiiMatch> {
        [
            (PiiKind::Email, &*EMAIL_REGEX),
            (PiiKind::Phone, &*PHONE_REGEX),
            (PiiKind::CreditCard, &*CREDIT_CARD_REGEX),
        ]
        .into_iter()
        .flat_map(|(kind, regex)| {
            regex.find_iter(text).map(move |found| PiiMatch {
                kind,
                value: found.as_str().to_string(),
            })
        })
        .collect()
    }

    /// Harmful terms present in `text`, in [`HARMFUL_TERMS`] order.
    pub fn harmful_terms(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        HARMFUL_TERMS
            .iter()
            .filter(|term| text.contains(*term))
            .map(|term| (*term).to_string())
            .collect()
    }
}

impl ContentClassifier for KeywordClassifier {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn classify(&self, input: &ContentInput) -> Result<ContentFindings, ClassifierError> {
        let ContentInput::Text(text) = input else {
            return Err(ClassifierError::Unsupported {
                classifier: self.name(),
                input: input.kind(),
            });
        };
        if text.trim().is_empty() {
            return Err(ClassifierError::EmptyInput);
        }

        let findings = ContentFindings {
            bias: self.bias(text),
            pii: self.pii(text),
            harmful_terms: self.harmful_terms(text),
        };
        debug!(
            classifier = self.name(),
            bias_score = findings.bias.score,
            pii = findings.pii.len(),
            harmful = findings.harmful_terms.len(),
            "classified text"
        );
        Ok(findings)
    }
}
