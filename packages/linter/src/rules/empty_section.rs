use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use folio_model::{Element, NodePath};

pub struct EmptySectionRule;

impl LintRule for EmptySectionRule {
    fn name(&self) -> &'static str {
        "empty-section"
    }

    fn description(&self) -> &'static str {
        "Sections without content"
    }

    fn check_element(&self, element: &Element, path: &NodePath) -> Vec<Diagnostic> {
        match element {
            Element::Container { name, children } if children.is_empty() => {
                vec![Diagnostic::info(
                    self.name(),
                    format!("Section '{}' has no content", name),
                    path.clone(),
                )]
            }
            _ => Vec::new(),
        }
    }
}
