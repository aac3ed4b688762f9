use folio_model::NodePath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Error => f.write_str("error"),
            DiagnosticLevel::Warning => f.write_str("warning"),
            DiagnosticLevel::Info => f.write_str("info"),
        }
    }
}

/// A diagnostic message from the linter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level
    pub level: DiagnosticLevel,

    /// The rule that generated this diagnostic
    pub rule: String,

    /// Human-readable message
    pub message: String,

    /// Node the issue was found on
    pub path: NodePath,

    /// Optional suggestion for fixing the issue
    pub suggestion: Option<String>,
}

impl Diagnostic {
    fn new(
        level: DiagnosticLevel,
        rule: impl Into<String>,
        message: impl Into<String>,
        path: NodePath,
    ) -> Self {
        Self {
            level,
            rule: rule.into(),
            message: message.into(),
            path,
            suggestion: None,
        }
    }

    pub fn error(rule: impl Into<String>, message: impl Into<String>, path: NodePath) -> Self {
        Self::new(DiagnosticLevel::Error, rule, message, path)
    }

    pub fn warning(rule: impl Into<String>, message: impl Into<String>, path: NodePath) -> Self {
        Self::new(DiagnosticLevel::Warning, rule, message, path)
    }

    pub fn info(rule: impl Into<String>, message: impl Into<String>, path: NodePath) -> Self {
        Self::new(DiagnosticLevel::Info, rule, message, path)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] {}: {}", self.level, self.rule, self.path, self.message)
    }
}
