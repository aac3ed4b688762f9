use super::open_document;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use folio_common::{export_document, DepthMode, Settings};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Document snapshot (.json)
    pub input: PathBuf,

    /// Write XML here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Legacy layout: indentation only grows and sections are left open
    #[arg(long)]
    pub accumulate_depth: bool,
}

pub fn export(args: ExportArgs, _settings: &Settings) -> Result<()> {
    let doc = open_document(&args.input)?;
    let mode = if args.accumulate_depth {
        DepthMode::Accumulating
    } else {
        DepthMode::Nested
    };
    let xml = export_document(doc.root(), mode);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &xml)
                .with_context(|| format!("Cannot write {}", path.display()))?;
            println!("  {} Exported {}", "✓".green(), path.display());
        }
        None => print!("{}", xml),
    }
    Ok(())
}
