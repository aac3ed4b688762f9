use crate::{HtmlRenderer, PlainTextRenderer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Output strategy consumed by [`crate::Draw`].
///
/// Each call returns the line for one node. Implementations must not keep
/// state between calls.
pub trait Renderer {
    fn render_text(&self, content: &str, bold: bool, italic: bool) -> String;

    fn render_image(&self, path: &str) -> String;

    fn render_table(&self, rows: usize, cols: usize) -> String;

    fn section_start(&self) -> String;

    fn section_end(&self) -> String;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Unknown render format: {0} (expected plain or html)")]
    UnknownFormat(String),
}

/// Built-in renderers, selectable by name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RendererKind {
    #[default]
    Plain,
    Html,
}

impl RendererKind {
    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            RendererKind::Plain => Box::new(PlainTextRenderer),
            RendererKind::Html => Box::new(HtmlRenderer),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RendererKind::Plain => "plain",
            RendererKind::Html => "html",
        }
    }
}

impl FromStr for RendererKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "text" | "console" => Ok(RendererKind::Plain),
            "html" => Ok(RendererKind::Html),
            _ => Err(RenderError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
