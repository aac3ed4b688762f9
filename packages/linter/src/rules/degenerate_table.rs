use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use folio_model::{Element, NodePath};

/// Flags tables with no rows or no columns
pub struct DegenerateTableRule;

impl LintRule for DegenerateTableRule {
    fn name(&self) -> &'static str {
        "degenerate-table"
    }

    fn description(&self) -> &'static str {
        "Tables need at least one row and one column"
    }

    fn check_element(&self, element: &Element, path: &NodePath) -> Vec<Diagnostic> {
        match element {
            Element::Table { rows, cols } if *rows == 0 || *cols == 0 => {
                vec![Diagnostic::error(
                    self.name(),
                    format!("Table is {}x{} and has no cells", rows, cols),
                    path.clone(),
                )]
            }
            _ => Vec::new(),
        }
    }
}
