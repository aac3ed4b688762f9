//! # Commands
//!
//! Reversible edits applied to a [`Document`].
//!
//! ## Command Semantics
//!
//! ### AddElement
//! - Inserts `element` under `parent` at `index`, or appends when `index` is `None`
//! - Resolves to `RemoveElement` at the exact path it inserted at
//!
//! ### RemoveElement
//! - Detaches the node at `path` together with all descendants
//! - When `expected` is set, the node at `path` must equal it or nothing is removed
//! - Resolves to `AddElement` at the former position, carrying the removed subtree
//!
//! Every command goes through the document's mutation checks, so the
//! lifecycle state decides whether it (or its inverse) may run.

use crate::errors::{EditorError, StructuralError};
use crate::Document;
use folio_model::{Element, NodePath, TreeError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    AddElement {
        parent: NodePath,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
        element: Element,
    },

    RemoveElement {
        path: NodePath,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expected: Option<Element>,
    },
}

impl Command {
    /// Append `element` to the document root
    pub fn add(element: Element) -> Self {
        Command::AddElement {
            parent: NodePath::root(),
            index: None,
            element,
        }
    }

    pub fn insert(parent: NodePath, index: usize, element: Element) -> Self {
        Command::AddElement {
            parent,
            index: Some(index),
            element,
        }
    }

    pub fn remove(path: NodePath) -> Self {
        Command::RemoveElement {
            path,
            expected: None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::AddElement { .. } => "AddElement",
            Command::RemoveElement { .. } => "RemoveElement",
        }
    }

    /// Apply to `doc` and return the command that exactly reverses it
    pub fn apply(&self, doc: &mut Document) -> Result<Command, EditorError> {
        match self {
            Command::AddElement {
                parent,
                index,
                element,
            } => {
                let index = match index {
                    Some(index) => *index,
                    None => doc
                        .get(parent)
                        .map(|node| node.children().len())
                        .ok_or_else(|| TreeError::NotFound(parent.clone()))?,
                };
                let path = doc.insert_element(parent, index, element.clone())?;
                Ok(Command::RemoveElement {
                    path,
                    expected: Some(element.clone()),
                })
            }

            Command::RemoveElement { path, expected } => {
                let (parent, index) = path.split_last().ok_or(TreeError::RootRemoval)?;
                if let Some(expected) = expected {
                    let found = doc
                        .get(path)
                        .ok_or_else(|| TreeError::NotFound(path.clone()))?;
                    if found != expected {
                        return Err(StructuralError::Diverged {
                            path: path.clone(),
                            expected: expected.type_tag(),
                            found: found.type_tag(),
                        }
                        .into());
                    }
                }
                let element = doc.remove_element(path)?;
                Ok(Command::AddElement {
                    parent,
                    index: Some(index),
                    element,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StateError;

    #[test]
    fn test_add_resolves_to_remove_at_insertion_path() {
        let mut doc = Document::new();
        doc.add_element(Element::text("first")).unwrap();

        let inverse = Command::add(Element::image("a.png")).apply(&mut doc).unwrap();
        assert_eq!(
            inverse,
            Command::RemoveElement {
                path: NodePath::from_indices(vec![1]),
                expected: Some(Element::image("a.png")),
            }
        );
    }

    #[test]
    fn test_remove_refuses_a_different_element() {
        let mut doc = Document::new();
        let inverse = Command::add(Element::text("X")).apply(&mut doc).unwrap();
        doc.insert_element(&NodePath::root(), 0, Element::text("Y"))
            .unwrap();

        let result = inverse.apply(&mut doc);
        assert!(matches!(
            result,
            Err(EditorError::Structural(StructuralError::Diverged { .. }))
        ));
        assert_eq!(doc.element_count(), 2);
    }

    #[test]
    fn test_remove_with_expected_subtree_when_unchanged() {
        let mut doc = Document::new();
        let section = Element::container_with("Ch1", vec![Element::text("x")]);
        let inverse = Command::add(section.clone()).apply(&mut doc).unwrap();

        assert_eq!(
            inverse.apply(&mut doc).unwrap(),
            Command::insert(NodePath::root(), 0, section)
        );
        assert_eq!(doc.element_count(), 0);
    }

    #[test]
    fn test_remove_resolves_to_positional_add() {
        let mut doc = Document::new();
        doc.add_element(Element::text("a")).unwrap();
        doc.add_element(Element::text("b")).unwrap();
        doc.add_element(Element::text("c")).unwrap();
        let before = doc.root().clone();

        let inverse = Command::remove(NodePath::from_indices(vec![1]))
            .apply(&mut doc)
            .unwrap();
        assert_eq!(
            inverse,
            Command::insert(NodePath::root(), 1, Element::text("b"))
        );

        inverse.apply(&mut doc).unwrap();
        assert_eq!(doc.root(), &before);
    }

    #[test]
    fn test_add_into_missing_parent_fails() {
        let mut doc = Document::new();
        let result = Command::AddElement {
            parent: NodePath::from_indices(vec![3]),
            index: None,
            element: Element::text("orphan"),
        }
        .apply(&mut doc);

        assert!(matches!(
            result,
            Err(EditorError::Structural(StructuralError::Tree(TreeError::NotFound(_))))
        ));
        assert_eq!(doc.version, 0);
    }

    #[test]
    fn test_remove_root_is_rejected() {
        let mut doc = Document::new();
        let result = Command::remove(NodePath::root()).apply(&mut doc);
        assert!(matches!(
            result,
            Err(EditorError::Structural(StructuralError::Tree(TreeError::RootRemoval)))
        ));
    }

    #[test]
    fn test_commands_respect_lifecycle() {
        let mut doc = Document::new();
        doc.submit_for_review().unwrap();
        doc.publish().unwrap();

        let result = Command::add(Element::text("late")).apply(&mut doc);
        assert!(matches!(
            result,
            Err(EditorError::State(StateError::Locked { .. }))
        ));
    }

    #[test]
    fn test_command_serialization() {
        let command = Command::insert(NodePath::from_indices(vec![0]), 2, Element::table(1, 2));
        let json = serde_json::to_string(&command).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, command);
        assert_eq!(command.name(), "AddElement");
    }
}
