//! Detection result types.

use serde::{Deserialize, Serialize};

use audit_model::{ParameterDescriptor, SensitiveKind};

/// A header bound to a sensitive kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub kind: SensitiveKind,
    /// Header text as found in the file.
    pub column: String,
    /// Pattern that matched the lower-cased header.
    pub pattern: String,
}

/// Outcome of running the detector over a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Sensitive bindings in kind declaration order.
    pub bindings: Vec<Binding>,
    /// Headers not bound to a sensitive kind, in header order.
    pub generic_columns: Vec<String>,
}

impl DetectionResult {
    /// Descriptors in report order: sensitive kinds first, then generic columns.
    pub fn descriptors(&self) -> Vec<ParameterDescriptor> {
        self.bindings
            .iter()
            .map(|binding| ParameterDescriptor::sensitive(binding.kind, binding.column.clone()))
            .chain(
                self.generic_columns
                    .iter()
                    .map(|column| ParameterDescriptor::generic(column.clone())),
            )
            .collect()
    }

    pub fn binding(&self, kind: SensitiveKind) -> Option<&Binding> {
        self.bindings.iter().find(|binding| binding.kind == kind)
    }

    /// Returns true if no header was recognised as a sensitive parameter.
    pub fn has_no_sensitive(&self) -> bool {
        self.bindings.is_empty()
    }
}
