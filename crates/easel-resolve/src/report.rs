//! Collected resolution issues

use serde::{Deserialize, Serialize};

/// Severity of a resolution issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single per-attribute issue found during resolution.
///
/// Issues are always recoverable: the offending value falls back through
/// the precedence chain and the rest of the configuration resolves
/// normally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Attribute the issue is recorded against; `"*"` for issues with
    /// the item as a whole.
    pub attr: String,
    /// Collection index of the offending item; `None` for
    /// single-instance and template issues.
    pub index: Option<usize>,
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    /// A user-supplied value failed its type validator.
    pub fn invalid_value(attr: &str, index: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            attr: attr.to_string(),
            index,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// A template value failed its type validator and is treated as
    /// absent. Distinct from an invalid item value so hosts can point at
    /// the template rather than at every item it would have touched.
    pub fn template_value(attr: &str, message: impl Into<String>) -> Self {
        Self {
            attr: attr.to_string(),
            index: None,
            severity: Severity::Warning,
            message: format!("invalid template value: {}", message.into()),
        }
    }

    /// A raw input key with no matching attribute schema node.
    pub fn unknown_attribute(attr: &str, index: Option<usize>) -> Self {
        Self {
            attr: attr.to_string(),
            index,
            severity: Severity::Warning,
            message: format!("unknown attribute '{}'", attr),
        }
    }

    /// A template key with no matching attribute schema node.
    pub fn template_unknown(attr: &str) -> Self {
        Self {
            attr: attr.to_string(),
            index: None,
            severity: Severity::Warning,
            message: format!("unknown attribute '{}' in template", attr),
        }
    }

    /// The raw input for an item was not an object at all.
    pub fn malformed_item(index: Option<usize>, got: &str) -> Self {
        Self {
            attr: "*".to_string(),
            index,
            severity: Severity::Error,
            message: format!("configuration must be an object, got {}", got),
        }
    }
}

/// All issues collected over one resolution pass
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ResolveReport {
    pub issues: Vec<Issue>,
}

impl ResolveReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// True when resolution recorded nothing at all
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Issues recorded against one collection item
    pub fn for_index(&self, index: usize) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.index == Some(index))
    }

    /// Get a human-readable summary
    pub fn summary(&self) -> String {
        let total = self.issues.len();
        if total == 0 {
            return "No issues found.".to_string();
        }
        format!(
            "{} issue(s): {} error(s), {} warning(s)",
            total,
            self.error_count(),
            self.warning_count(),
        )
    }
}
