//! # Folio Render
//!
//! Output strategies for the document tree. A [`Renderer`] turns one node
//! into one output line and keeps no state between calls, so strategies can
//! be swapped freely; [`Draw`] walks a tree and collects the lines.

mod draw;
mod html;
mod plain;
mod renderer;

#[cfg(test)]
mod tests;

pub use draw::{render_to_string, Draw};
pub use html::HtmlRenderer;
pub use plain::PlainTextRenderer;
pub use renderer::{RenderError, Renderer, RendererKind};
