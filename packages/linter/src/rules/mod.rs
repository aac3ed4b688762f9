mod degenerate_table;
mod empty_section;
mod empty_text;
mod missing_image_path;

pub use degenerate_table::DegenerateTableRule;
pub use empty_section::EmptySectionRule;
pub use empty_text::EmptyTextRule;
pub use missing_image_path::MissingImagePathRule;

use crate::diagnostic::Diagnostic;
use folio_model::{Element, NodePath};

/// Trait for implementing lint rules
pub trait LintRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check one element; children are visited separately
    fn check_element(&self, _element: &Element, _path: &NodePath) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// Registry of all available lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(EmptyTextRule),
                Box::new(MissingImagePathRule),
                Box::new(DegenerateTableRule),
                Box::new(EmptySectionRule),
            ],
        }
    }

    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}
