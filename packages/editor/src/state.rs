//! # Lifecycle States
//!
//! ```text
//! Draft ──submit_for_review──▶ Review ──publish──▶ Published
//! ```
//!
//! Transitions only move forward. The state decides which mutations the
//! document accepts:
//!
//! - **Draft**: anything
//! - **Review**: leaf elements (text, images, tables) only; containers are frozen
//! - **Published**: nothing

use crate::errors::StateError;
use folio_model::Element;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    #[default]
    Draft,
    Review,
    Published,
}

/// How much editing the current state permits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditScope {
    Full,
    Limited,
}

impl LifecycleState {
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleState::Draft => "Draft",
            LifecycleState::Review => "Review",
            LifecycleState::Published => "Published",
        }
    }

    /// The only state reachable from this one, if any
    pub fn next(&self) -> Option<LifecycleState> {
        match self {
            LifecycleState::Draft => Some(LifecycleState::Review),
            LifecycleState::Review => Some(LifecycleState::Published),
            LifecycleState::Published => None,
        }
    }

    pub fn can_transition_to(&self, to: LifecycleState) -> bool {
        self.next() == Some(to)
    }

    pub fn edit_scope(&self) -> Result<EditScope, StateError> {
        match self {
            LifecycleState::Draft => Ok(EditScope::Full),
            LifecycleState::Review => Ok(EditScope::Limited),
            LifecycleState::Published => Err(StateError::Locked { state: *self }),
        }
    }

    /// Check that `element` may be inserted into or removed from the tree
    pub fn check_mutation(&self, element: &Element) -> Result<(), StateError> {
        match self.edit_scope()? {
            EditScope::Full => Ok(()),
            EditScope::Limited if element.is_container() => Err(StateError::StructureFrozen {
                state: *self,
                type_tag: element.type_tag(),
            }),
            EditScope::Limited => Ok(()),
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
