//! # Document Handle
//!
//! Core document abstraction for folio editing.
//!
//! A Document owns one root container, tracks its lifecycle state and
//! notifies attached observers after every successful change.
//!
//! ## Lifecycle
//!
//! ```text
//! Build → Edit (Draft) → Review (leaf edits only) → Published (locked)
//!   ↓          ↓               ↓                          ↓
//! Builder  Commands       Commands                  Render / Save
//! ```

use crate::builder::PageSetup;
use crate::errors::{EditorError, StateError, StructuralError};
use crate::observer::{
    ChangeEvent, ChannelObserver, DocumentObserver, ObserverRegistry, Subscription,
};
use crate::state::{EditScope, LifecycleState};
use folio_common::count_words;
use folio_model::{Descendants, Element, NodePath, TreeError};
use std::sync::{mpsc, Arc};
use tracing::{debug, info, warn};

pub(crate) const ROOT_NAME: &str = "Root";

/// Editable folio document
#[derive(Debug)]
pub struct Document {
    /// Current version number (increments on each successful mutation)
    pub version: u64,

    root: Element,
    state: LifecycleState,
    page: PageSetup,
    observers: ObserverRegistry,
}

impl Document {
    /// Create an empty draft document with default page properties
    pub fn new() -> Self {
        Self::with_page(PageSetup::default())
    }

    pub(crate) fn with_page(page: PageSetup) -> Self {
        Self {
            version: 0,
            root: Element::container(ROOT_NAME),
            state: LifecycleState::Draft,
            page,
            observers: ObserverRegistry::default(),
        }
    }

    /// Reassemble a document from persisted parts. `root` must be a container.
    pub(crate) fn from_parts(root: Element, state: LifecycleState, page: PageSetup) -> Self {
        debug_assert!(root.is_container());
        Self {
            version: 0,
            root,
            state,
            page,
            observers: ObserverRegistry::default(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, path: &NodePath) -> Option<&Element> {
        self.root.get(path)
    }

    /// Every element below the root, depth-first
    pub fn iter(&self) -> Descendants<'_> {
        self.root.descendants()
    }

    pub fn element_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn word_count(&self) -> usize {
        count_words(&self.root)
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn page(&self) -> &PageSetup {
        &self.page
    }

    /// Ask the current state how much editing it allows
    pub fn edit(&self) -> Result<EditScope, StateError> {
        let scope = self.state.edit_scope();
        match &scope {
            Ok(scope) => debug!(state = %self.state, ?scope, "Edit requested"),
            Err(e) => warn!(state = %self.state, error = %e, "Edit rejected"),
        }
        scope
    }

    /// Draft → Review
    pub fn submit_for_review(&mut self) -> Result<(), StateError> {
        self.transition_to(LifecycleState::Review)
    }

    /// Review → Published
    pub fn publish(&mut self) -> Result<(), StateError> {
        self.transition_to(LifecycleState::Published)
    }

    pub fn transition_to(&mut self, to: LifecycleState) -> Result<(), StateError> {
        let from = self.state;
        if !from.can_transition_to(to) {
            warn!(%from, %to, "Rejected lifecycle transition");
            return Err(StateError::InvalidTransition { from, to });
        }

        self.state = to;
        info!(%from, %to, "Document state changed");
        self.notify(&ChangeEvent::StateChanged { from, to });
        Ok(())
    }

    /// Append `element` to the root container
    pub fn add_element(&mut self, element: Element) -> Result<NodePath, EditorError> {
        let index = self.root.children().len();
        self.insert_element(&NodePath::root(), index, element)
    }

    /// Insert `element` as the `index`-th child of the container at `parent`
    pub fn insert_element(
        &mut self,
        parent: &NodePath,
        index: usize,
        element: Element,
    ) -> Result<NodePath, EditorError> {
        self.check_mutation(&element)?;

        let type_tag = element.type_tag();
        let path = self.root.insert(parent, index, element)?;
        self.version += 1;

        debug!(%path, type_tag, version = self.version, "Inserted element");
        self.notify(&ChangeEvent::ElementInserted {
            path: path.clone(),
            type_tag,
        });
        Ok(path)
    }

    /// Detach and return the subtree at `path`
    pub fn remove_element(&mut self, path: &NodePath) -> Result<Element, EditorError> {
        if path.is_root() {
            return Err(TreeError::RootRemoval.into());
        }
        let target = self
            .root
            .get(path)
            .ok_or_else(|| TreeError::NotFound(path.clone()))?;
        self.check_mutation(target)?;

        let removed = self.root.remove(path)?;
        self.version += 1;

        let type_tag = removed.type_tag();
        debug!(%path, type_tag, version = self.version, "Removed element");
        self.notify(&ChangeEvent::ElementRemoved {
            path: path.clone(),
            type_tag,
        });
        Ok(removed)
    }

    fn check_mutation(&self, element: &Element) -> Result<(), StateError> {
        self.state.check_mutation(element).map_err(|e| {
            warn!(
                state = %self.state,
                type_tag = element.type_tag(),
                error = %e,
                "Mutation rejected"
            );
            e
        })
    }

    pub fn attach(&mut self, observer: Arc<dyn DocumentObserver>) -> Subscription {
        let subscription = self.observers.attach(observer);
        debug!(%subscription, "Observer attached");
        subscription
    }

    pub fn detach(&mut self, subscription: Subscription) -> Result<(), StructuralError> {
        self.observers.detach(subscription)?;
        debug!(%subscription, "Observer detached");
        Ok(())
    }

    /// Attach a [`ChannelObserver`] and return the receiving end
    pub fn subscribe(&mut self) -> (Subscription, mpsc::Receiver<ChangeEvent>) {
        let (observer, receiver) = ChannelObserver::new();
        let subscription = self.attach(Arc::new(observer));
        (subscription, receiver)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Deliver `event` to every observer, in attachment order
    pub fn notify(&self, event: &ChangeEvent) {
        for observer in self.observers.observers() {
            observer.on_document_changed(self, event);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
