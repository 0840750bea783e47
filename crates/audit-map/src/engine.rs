//! Parameter detection engine.

use tracing::{debug, trace};

use audit_model::{DetectionOptions, ParameterDescriptor};

use crate::error::DetectionError;
use crate::patterns::{RuleTable, normalize_header};
use crate::types::{Binding, DetectionResult};

/// Binds CSV headers to sensitive parameter kinds.
///
/// Detection is one-to-one: each kind binds at most one header (the first in
/// header order that matches) and a header bound to an earlier kind is never
/// offered to a later one. Every header left over becomes a generic
/// parameter.
///
/// # Example
///
/// ```ignore
/// use audit_map::ParameterDetector;
///
/// let headers = vec!["Years".to_string(), "Sex".to_string(), "City".to_string()];
/// let result = ParameterDetector::builtin().detect(&headers);
/// assert!(result.generic_columns.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterDetector {
    rules: RuleTable,
}

impl ParameterDetector {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// Detector using only the built-in rule table.
    pub fn builtin() -> Self {
        Self::new(RuleTable::builtin())
    }

    /// Detector using the built-in rules plus configured extra patterns.
    pub fn from_options(options: &DetectionOptions) -> Result<Self, DetectionError> {
        RuleTable::with_options(options).map(Self::new)
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Runs detection over a header row.
    pub fn detect(&self, headers: &[String]) -> DetectionResult {
        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
        let mut claimed = vec![false; headers.len()];
        let mut bindings = Vec::new();

        for rule in self.rules.rules() {
            for (idx, header) in headers.iter().enumerate() {
                if claimed[idx] {
                    continue;
                }
                let Some(pattern) = rule.matching_pattern(&normalized[idx]) else {
                    continue;
                };
                trace!(kind = %rule.kind, column = %header, pattern, "bound header");
                claimed[idx] = true;
                bindings.push(Binding {
                    kind: rule.kind,
                    column: header.clone(),
                    pattern: pattern.to_string(),
                });
                break;
            }
        }

        let generic_columns: Vec<String> = headers
            .iter()
            .zip(&claimed)
            .filter(|(_, bound)| !**bound)
            .map(|(header, _)| header.clone())
            .collect();

        debug!(
            sensitive = bindings.len(),
            generic = generic_columns.len(),
            "detected parameters"
        );
        DetectionResult {
            bindings,
            generic_columns,
        }
    }
}

/// Detects parameters with the built-in rules and returns descriptors in
/// report order.
pub fn detect_parameters(headers: &[String]) -> Vec<ParameterDescriptor> {
    ParameterDetector::builtin().detect(headers).descriptors()
}
