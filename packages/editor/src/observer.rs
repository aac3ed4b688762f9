//! # Change Notifications
//!
//! Observers are shared (`Arc`) rather than borrowed, and each `attach`
//! hands back a [`Subscription`] token that `detach` consumes. The document
//! never holds a reference that can outlive its observer.

use crate::errors::StructuralError;
use crate::state::LifecycleState;
use crate::Document;
use folio_model::NodePath;
use std::fmt;
use std::sync::{mpsc, Arc, Mutex, PoisonError};
use tracing::debug;

/// Token identifying one attached observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(u64);

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What changed in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    ElementInserted {
        path: NodePath,
        type_tag: &'static str,
    },
    ElementRemoved {
        path: NodePath,
        type_tag: &'static str,
    },
    StateChanged {
        from: LifecycleState,
        to: LifecycleState,
    },
}

/// Receives a synchronous callback after every successful change
pub trait DocumentObserver: Send + Sync {
    fn on_document_changed(&self, document: &Document, event: &ChangeEvent);
}

/// Attached observers in attachment order
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    next_id: u64,
    entries: Vec<(Subscription, Arc<dyn DocumentObserver>)>,
}

impl ObserverRegistry {
    pub(crate) fn attach(&mut self, observer: Arc<dyn DocumentObserver>) -> Subscription {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.entries.push((subscription, observer));
        subscription
    }

    pub(crate) fn detach(&mut self, subscription: Subscription) -> Result<(), StructuralError> {
        let position = self
            .entries
            .iter()
            .position(|(id, _)| *id == subscription)
            .ok_or(StructuralError::UnknownSubscription(subscription))?;
        self.entries.remove(position);
        Ok(())
    }

    pub(crate) fn observers(&self) -> impl Iterator<Item = &Arc<dyn DocumentObserver>> {
        self.entries.iter().map(|(_, observer)| observer)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &format!("{} observers", self.entries.len()))
            .finish()
    }
}

/// Counts shown in a status line
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    pub elements: usize,
    pub words: usize,
    pub updates: usize,
}

/// Observer that recounts elements and words on every change
#[derive(Debug, Default)]
pub struct StatusBar {
    stats: Mutex<DocumentStats>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> DocumentStats {
        *self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DocumentObserver for StatusBar {
    fn on_document_changed(&self, document: &Document, _event: &ChangeEvent) {
        let mut stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);
        stats.elements = document.element_count();
        stats.words = document.word_count();
        stats.updates += 1;
        debug!(elements = stats.elements, words = stats.words, "Status bar updated");
    }
}

/// Observer that forwards every event onto a channel
#[derive(Debug)]
pub struct ChannelObserver {
    sender: Mutex<mpsc::Sender<ChangeEvent>>,
}

impl ChannelObserver {
    pub fn new() -> (Self, mpsc::Receiver<ChangeEvent>) {
        let (sender, receiver) = mpsc::channel();
        (
            Self {
                sender: Mutex::new(sender),
            },
            receiver,
        )
    }
}

impl DocumentObserver for ChannelObserver {
    fn on_document_changed(&self, _document: &Document, event: &ChangeEvent) {
        let sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        if sender.send(event.clone()).is_err() {
            debug!("Change event receiver dropped");
        }
    }
}
