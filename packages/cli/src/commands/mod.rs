pub mod demo;
pub mod export;
pub mod lint;
pub mod render;
pub mod stats;

pub use demo::{demo, DemoArgs};
pub use export::{export, ExportArgs};
pub use lint::{lint, LintArgs};
pub use render::{render, RenderArgs};
pub use stats::{stats, StatsArgs};

use anyhow::{Context, Result};
use folio_editor::{load_from_path, Document};
use std::path::Path;

fn open_document(path: &Path) -> Result<Document> {
    load_from_path(path).with_context(|| format!("Cannot open {}", path.display()))
}
