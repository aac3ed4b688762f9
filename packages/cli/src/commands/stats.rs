use super::open_document;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_common::Settings;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Document snapshot (.json)
    pub input: PathBuf,
}

pub fn stats(args: StatsArgs, _settings: &Settings) -> Result<()> {
    let doc = open_document(&args.input)?;
    let page = doc.page();

    println!("{}", args.input.display().to_string().bright_white().bold());
    println!("   State:      {}", doc.state());
    println!("   Page:       {}", page.page_size);
    println!("   Font:       {} {}pt", page.font.name, page.font.size);
    println!("   Elements:   {}", doc.element_count());
    println!("   Sections:   {}", doc.root().container_count());
    println!("   Words:      {}", doc.word_count());
    if !page.header.is_empty() {
        println!("   Header:     {}", page.header);
    }
    if !page.footer.is_empty() {
        println!("   Footer:     {}", page.footer);
    }
    Ok(())
}
