//! JSON snapshots of a document's tree, state and page setup.
//!
//! Observers and undo history are not part of a snapshot.

use crate::builder::PageSetup;
use crate::errors::EditorError;
use crate::state::LifecycleState;
use crate::Document;
use folio_model::Element;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const SNAPSHOT_FORMAT: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    format: u32,
    state: LifecycleState,
    page: &'a PageSetup,
    root: &'a Element,
}

#[derive(Deserialize)]
struct Snapshot {
    format: u32,
    state: LifecycleState,
    page: PageSetup,
    root: Element,
}

pub fn save(doc: &Document) -> Result<Vec<u8>, EditorError> {
    let snapshot = SnapshotRef {
        format: SNAPSHOT_FORMAT,
        state: doc.state(),
        page: doc.page(),
        root: doc.root(),
    };
    Ok(serde_json::to_vec_pretty(&snapshot)?)
}

pub fn load(bytes: &[u8]) -> Result<Document, EditorError> {
    let snapshot: Snapshot = serde_json::from_slice(bytes)?;

    if snapshot.format != SNAPSHOT_FORMAT {
        return Err(EditorError::InvalidSnapshot(format!(
            "unsupported format version {} (expected {})",
            snapshot.format, SNAPSHOT_FORMAT
        )));
    }
    if !snapshot.root.is_container() {
        return Err(EditorError::InvalidSnapshot(format!(
            "root must be a Container, found {}",
            snapshot.root.type_tag()
        )));
    }

    Ok(Document::from_parts(
        snapshot.root,
        snapshot.state,
        snapshot.page,
    ))
}

pub fn save_to_path(doc: &Document, path: &Path) -> Result<(), EditorError> {
    let bytes = save(doc)?;
    std::fs::write(path, bytes)?;
    debug!(path = %path.display(), "Saved document");
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Document, EditorError> {
    let bytes = std::fs::read(path)?;
    let doc = load(&bytes)?;
    debug!(path = %path.display(), elements = doc.element_count(), "Loaded document");
    Ok(doc)
}
