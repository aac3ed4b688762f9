use crate::diagnostic::{Diagnostic, DiagnosticLevel};
use crate::rules::RuleRegistry;
use folio_model::{Element, NodePath};

/// Options for configuring the linter
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,

    /// Drop diagnostics below this severity (keeps everything if None)
    pub min_level: Option<DiagnosticLevel>,
}

/// Lint every element below `root` and return diagnostics in document order.
///
/// The root itself is the document wrapper and is not checked.
pub fn lint_document(root: &Element, options: LintOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    let mut diagnostics = Vec::new();

    for (index, child) in root.children().iter().enumerate() {
        lint_element(child, &NodePath::root().child(index), &registry, &mut diagnostics);
    }

    if let Some(min_level) = options.min_level {
        // Error < Warning < Info
        diagnostics.retain(|d| d.level <= min_level);
    }
    diagnostics
}

fn lint_element(
    element: &Element,
    path: &NodePath,
    registry: &RuleRegistry,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for rule in registry.rules() {
        diagnostics.extend(rule.check_element(element, path));
    }

    for (index, child) in element.children().iter().enumerate() {
        lint_element(child, &path.child(index), registry, diagnostics);
    }
}
