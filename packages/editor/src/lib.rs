//! # Folio Editor
//!
//! Document editing engine for folio.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Element tree + NodePath addressing   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + commands       │
//! │  - Draft → Review → Published               │
//! │  - Observers notified on every change       │
//! │  - Undo/redo through a CommandLog           │
//! │  - JSON snapshots                           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render / common: renderers and visitors     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_editor::{Command, CommandLog, Document};
//! use folio_model::Element;
//!
//! let mut doc = Document::new();
//! let mut log = CommandLog::new();
//!
//! log.execute(Command::add(Element::text("Hello world")), &mut doc)?;
//! assert_eq!(doc.word_count(), 2);
//!
//! log.undo(&mut doc)?;
//! assert_eq!(doc.element_count(), 0);
//!
//! let bytes = folio_editor::save(&doc)?;
//! ```

mod builder;
mod command_log;
mod commands;
mod document;
mod errors;
mod observer;
mod persist;
mod state;

pub use builder::{DocumentBuilder, Font, Margins, PageSetup};
pub use command_log::{CommandBatch, CommandLog};
pub use commands::Command;
pub use document::Document;
pub use errors::{EditorError, HistoryAction, StateError, StructuralError};
pub use observer::{
    ChangeEvent, ChannelObserver, DocumentObserver, DocumentStats, StatusBar, Subscription,
};
pub use persist::{load, load_from_path, save, save_to_path, SNAPSHOT_FORMAT};
pub use state::{EditScope, LifecycleState};
