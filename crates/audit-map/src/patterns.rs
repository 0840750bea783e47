//! Ordered rule table used to recognise sensitive columns.
//!
//! A header matches a kind when its lower-cased text contains any of the
//! kind's patterns. Kinds are tried in [`SensitiveKind::ALL`] order, so while
//! `age` is still unbound a header such as `Wage` is claimed by it before
//! `income` sees it.
//!
//! Age patterns only name ages and years. Date-of-birth columns hold dates,
//! which would read as their leading year, so they stay generic.

use audit_model::{DetectionOptions, SensitiveKind};

use crate::error::DetectionError;

const AGE_PATTERNS: &[&str] = &["age", "year"];
const GENDER_PATTERNS: &[&str] = &["gender", "sex"];
const LOCATION_PATTERNS: &[&str] = &[
    "location", "city", "country", "state", "region", "address", "town", "zip", "postal",
];
const RELIGION_PATTERNS: &[&str] = &["religion", "relig", "faith", "belief"];
const RACE_PATTERNS: &[&str] = &["race", "ethnic", "nationality"];
const DISABILITY_PATTERNS: &[&str] = &["disab", "handicap", "impair"];
const OCCUPATION_PATTERNS: &[&str] = &["occupation", "job", "profession", "employ", "work"];
const INCOME_PATTERNS: &[&str] = &["income", "salary", "wage", "earning"];
const EDUCATION_PATTERNS: &[&str] = &["education", "degree", "school", "qualification"];
const MARITAL_PATTERNS: &[&str] = &["marital", "married", "spouse", "civil status"];

/// Built-in substring patterns for a kind (lower case).
#[must_use]
pub fn builtin_patterns(kind: SensitiveKind) -> &'static [&'static str] {
    match kind {
        SensitiveKind::Age => AGE_PATTERNS,
        SensitiveKind::Gender => GENDER_PATTERNS,
        SensitiveKind::Location => LOCATION_PATTERNS,
        SensitiveKind::Religion => RELIGION_PATTERNS,
        SensitiveKind::Race => RACE_PATTERNS,
        SensitiveKind::Disability => DISABILITY_PATTERNS,
        SensitiveKind::Occupation => OCCUPATION_PATTERNS,
        SensitiveKind::Income => INCOME_PATTERNS,
        SensitiveKind::Education => EDUCATION_PATTERNS,
        SensitiveKind::Marital => MARITAL_PATTERNS,
    }
}

/// Lower-cases a header for pattern comparison.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// One kind and its patterns, in match priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub kind: SensitiveKind,
    pub patterns: Vec<String>,
}

impl Rule {
    /// Returns the first pattern contained in an already normalized header.
    pub fn matching_pattern(&self, normalized_header: &str) -> Option<&str> {
        self.patterns
            .iter()
            .map(String::as_str)
            .find(|pattern| normalized_header.contains(pattern))
    }
}

/// Rules for every sensitive kind, in detection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// The built-in rule table.
    pub fn builtin() -> Self {
        let rules = SensitiveKind::ALL
            .into_iter()
            .map(|kind| Rule {
                kind,
                patterns: builtin_patterns(kind)
                    .iter()
                    .map(|pattern| (*pattern).to_string())
                    .collect(),
            })
            .collect();
        Self { rules }
    }

    /// Built-in rules extended with configured patterns.
    ///
    /// Extra patterns are lower-cased and appended after the built-ins of the
    /// same kind; duplicates are skipped.
    pub fn with_options(options: &DetectionOptions) -> Result<Self, DetectionError> {
        let mut table = Self::builtin();
        for (kind_name, patterns) in &options.extra_patterns {
            let kind: SensitiveKind = kind_name
                .parse()
                .map_err(|_| DetectionError::UnknownKind(kind_name.clone()))?;
            let Some(rule) = table.rules.iter_mut().find(|rule| rule.kind == kind) else {
                continue;
            };
            for pattern in patterns {
                let normalized = normalize_header(pattern);
                if normalized.is_empty() {
                    return Err(DetectionError::EmptyPattern {
                        kind: kind_name.clone(),
                    });
                }
                if !rule.patterns.contains(&normalized) {
                    rule.patterns.push(normalized);
                }
            }
        }
        Ok(table)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, kind: SensitiveKind) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.kind == kind)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
