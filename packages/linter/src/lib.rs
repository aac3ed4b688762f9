//! Structural checks for folio documents.

mod diagnostic;
mod linter;
mod rules;

pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use linter::{lint_document, LintOptions};
pub use rules::{
    DegenerateTableRule, EmptySectionRule, EmptyTextRule, LintRule, MissingImagePathRule,
    RuleRegistry,
};
