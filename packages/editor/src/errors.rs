//! Error types for the editor

use crate::observer::Subscription;
use crate::state::LifecycleState;
use folio_model::{NodePath, TreeError};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Structural error: {0}")]
    Structural(#[from] StructuralError),

    #[error("State error: {0}")]
    State(#[from] StateError),

    #[error("Nothing to {0}")]
    EmptyHistory(HistoryAction),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

impl From<TreeError> for EditorError {
    fn from(e: TreeError) -> Self {
        EditorError::Structural(StructuralError::Tree(e))
    }
}

/// Problems with the shape of the tree or the observer registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("Unknown or already detached subscription {0}")]
    UnknownSubscription(Subscription),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("History is stale at {path}: expected {expected}, found {found}")]
    Diverged {
        path: NodePath,
        expected: &'static str,
        found: &'static str,
    },
}

/// Edits or transitions the current lifecycle state does not allow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Document is {state}; editing is locked")]
    Locked { state: LifecycleState },

    #[error("Document is in {state}; {type_tag} elements cannot be added or removed")]
    StructureFrozen {
        state: LifecycleState,
        type_tag: &'static str,
    },

    #[error("Cannot move document from {from} to {to}")]
    InvalidTransition {
        from: LifecycleState,
        to: LifecycleState,
    },
}

/// Which side of the history an operation targeted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Undo,
    Redo,
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryAction::Undo => f.write_str("undo"),
            HistoryAction::Redo => f.write_str("redo"),
        }
    }
}
