//! Sensitive parameter kinds and column descriptors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Demographic attributes the detector knows how to recognise.
///
/// The declaration order is significant: detection visits kinds in this order
/// and an earlier kind claims a header before any later kind can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitiveKind {
    Age,
    Gender,
    Location,
    Religion,
    Race,
    Disability,
    Occupation,
    Income,
    Education,
    Marital,
}

impl SensitiveKind {
    /// All kinds in detection order.
    pub const ALL: [SensitiveKind; 10] = [
        SensitiveKind::Age,
        SensitiveKind::Gender,
        SensitiveKind::Location,
        SensitiveKind::Religion,
        SensitiveKind::Race,
        SensitiveKind::Disability,
        SensitiveKind::Occupation,
        SensitiveKind::Income,
        SensitiveKind::Education,
        SensitiveKind::Marital,
    ];

    /// Canonical lower-case identifier (used in config files and JSON).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Location => "location",
            Self::Religion => "religion",
            Self::Race => "race",
            Self::Disability => "disability",
            Self::Occupation => "occupation",
            Self::Income => "income",
            Self::Education => "education",
            Self::Marital => "marital",
        }
    }

    /// Display label for reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::Location => "Location",
            Self::Religion => "Religion",
            Self::Race => "Race / Ethnicity",
            Self::Disability => "Disability",
            Self::Occupation => "Occupation",
            Self::Income => "Income",
            Self::Education => "Education",
            Self::Marital => "Marital Status",
        }
    }
}

impl fmt::Display for SensitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensitiveKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownParameterKind(s.to_string()))
    }
}

/// Kind of a detected parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// One of the fixed demographic kinds.
    Sensitive(SensitiveKind),
    /// Any other column; the kind is the raw column name.
    Generic(String),
}

impl ParameterKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sensitive(kind) => kind.as_str(),
            Self::Generic(name) => name,
        }
    }

    pub fn sensitive(&self) -> Option<SensitiveKind> {
        match self {
            Self::Sensitive(kind) => Some(*kind),
            Self::Generic(_) => None,
        }
    }

    pub fn is_age(&self) -> bool {
        self.sensitive() == Some(SensitiveKind::Age)
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binding of a parameter kind to the column that supplies its values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub kind: ParameterKind,
    /// Exact header text, case preserved.
    pub column: String,
}

impl ParameterDescriptor {
    pub fn sensitive(kind: SensitiveKind, column: impl Into<String>) -> Self {
        Self {
            kind: ParameterKind::Sensitive(kind),
            column: column.into(),
        }
    }

    /// Generic descriptor: the kind is the column name itself.
    pub fn generic(column: impl Into<String>) -> Self {
        let column = column.into();
        Self {
            kind: ParameterKind::Generic(column.clone()),
            column,
        }
    }

    /// Report label: the kind label for sensitive kinds, the column otherwise.
    pub fn label(&self) -> &str {
        match &self.kind {
            ParameterKind::Sensitive(kind) => kind.label(),
            ParameterKind::Generic(name) => name,
        }
    }
}

/// Finds the descriptor bound to a fixed kind, if any.
pub fn find_sensitive(
    descriptors: &[ParameterDescriptor],
    kind: SensitiveKind,
) -> Option<&ParameterDescriptor> {
    descriptors
        .iter()
        .find(|descriptor| descriptor.kind.sensitive() == Some(kind))
}
