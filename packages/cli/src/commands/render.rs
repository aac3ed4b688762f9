use super::open_document;
use anyhow::Result;
use clap::Args;
use folio_common::Settings;
use folio_render::{render_to_string, RendererKind};
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Document snapshot (.json)
    pub input: PathBuf,

    /// Output format (plain, html)
    #[arg(short, long, default_value = "plain")]
    pub format: RendererKind,
}

pub fn render(args: RenderArgs, _settings: &Settings) -> Result<()> {
    let doc = open_document(&args.input)?;
    debug!(format = args.format.name(), "Rendering document");

    let renderer = args.format.renderer();
    print!("{}", render_to_string(doc.root(), renderer.as_ref()));
    Ok(())
}
