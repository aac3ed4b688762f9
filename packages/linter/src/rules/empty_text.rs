use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use folio_model::{Element, NodePath};

/// Flags text blocks that contribute no words
pub struct EmptyTextRule;

impl LintRule for EmptyTextRule {
    fn name(&self) -> &'static str {
        "empty-text"
    }

    fn description(&self) -> &'static str {
        "Text blocks should contain at least one word"
    }

    fn check_element(&self, element: &Element, path: &NodePath) -> Vec<Diagnostic> {
        match element {
            Element::TextBlock { content, .. } if content.split_whitespace().next().is_none() => {
                vec![Diagnostic::warning(
                    self.name(),
                    "Text block is empty or contains only whitespace",
                    path.clone(),
                )
                .with_suggestion("Remove the block or give it some content")]
            }
            _ => Vec::new(),
        }
    }
}
