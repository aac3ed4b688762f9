use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use folio_model::{Element, NodePath};

/// Flags images that point nowhere
pub struct MissingImagePathRule;

impl LintRule for MissingImagePathRule {
    fn name(&self) -> &'static str {
        "missing-image-path"
    }

    fn description(&self) -> &'static str {
        "Images must reference a file"
    }

    fn check_element(&self, element: &Element, path: &NodePath) -> Vec<Diagnostic> {
        match element {
            Element::Image { path: source } if source.trim().is_empty() => {
                vec![Diagnostic::error(self.name(), "Image has no source path", path.clone())
                    .with_suggestion("Set the image path or remove the image")]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_blank_path() {
        let path = NodePath::from_indices(vec![1]);
        let diagnostics = MissingImagePathRule.check_element(&Element::image(" "), &path);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].suggestion.is_some());
    }

    #[test]
    fn test_ignores_other_elements() {
        let path = NodePath::from_indices(vec![1]);
        assert!(MissingImagePathRule
            .check_element(&Element::image("logo.png"), &path)
            .is_empty());
        assert!(MissingImagePathRule
            .check_element(&Element::text(""), &path)
            .is_empty());
    }
}
