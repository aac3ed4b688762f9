use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use folio_common::{count_words, export_document, DepthMode, Settings};
use folio_editor::{save_to_path, Command, CommandLog, Document, DocumentBuilder, StatusBar};
use folio_model::{Decoration, Element, NodePath};
use folio_render::{Draw, HtmlRenderer, PlainTextRenderer};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Save the finished sample document as a JSON snapshot
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn demo(args: DemoArgs, settings: &Settings) -> Result<()> {
    println!("{}", "Building sample document".bright_blue().bold());
    let mut doc = DocumentBuilder::new(settings)
        .header("Folio sample")
        .footer("Page 1")
        .build();
    let status = Arc::new(StatusBar::new());
    doc.attach(status.clone());
    let mut log = CommandLog::from_settings(settings);

    log.begin_batch();
    log.set_batch_description("Title page");
    log.execute(
        Command::add(Element::styled_text("Folio Sample", Decoration::bold())),
        &mut doc,
    )?;
    log.execute(Command::add(Element::text("Hello world")), &mut doc)?;
    log.end_batch();

    log.execute(Command::add(Element::container("Ch1")), &mut doc)?;
    let chapter = NodePath::from_indices(vec![2]);
    log.execute(
        Command::insert(chapter.clone(), 0, Element::text("One two three")),
        &mut doc,
    )?;
    log.execute(
        Command::insert(chapter.clone(), 1, Element::image("figures/chart.png")),
        &mut doc,
    )?;
    log.execute(Command::insert(chapter, 2, Element::table(3, 4)), &mut doc)?;

    let stats = status.stats();
    println!(
        "  {} {} elements, {} words, {} updates",
        "✓".green(),
        stats.elements,
        stats.words,
        stats.updates
    );

    section("Plain text");
    print_lines(&doc.root().draw(&PlainTextRenderer));

    section("HTML");
    print_lines(&doc.root().draw(&HtmlRenderer));

    section("Visitors");
    println!("  Word count: {}", count_words(doc.root()));
    print!("{}", export_document(doc.root(), DepthMode::Nested));

    section("Undo / redo");
    log.undo(&mut doc)?;
    println!("  Undo -> {} elements", doc.element_count());
    log.redo(&mut doc)?;
    println!("  Redo -> {} elements", doc.element_count());

    section("Lifecycle");
    walk_lifecycle(&mut doc, &mut log);

    if let Some(path) = &args.out {
        save_to_path(&doc, path).with_context(|| format!("Cannot save {}", path.display()))?;
        println!();
        println!("  {} Saved {}", "✓".green(), path.display());
    }
    Ok(())
}

fn walk_lifecycle(doc: &mut Document, log: &mut CommandLog) {
    report("submit for review", doc.submit_for_review().map_err(Into::into));
    report(
        "add note in review",
        log.execute(Command::add(Element::text("Reviewer note")), doc),
    );
    report(
        "add section in review",
        log.execute(Command::add(Element::container("Ch2")), doc),
    );
    report("publish", doc.publish().map_err(Into::into));
    report(
        "edit after publish",
        log.execute(Command::add(Element::text("Too late")), doc),
    );
    report("undo after publish", log.undo(doc));
    println!("  State: {}", doc.state().to_string().bold());
}

fn report(action: &str, result: Result<(), folio_editor::EditorError>) {
    match result {
        Ok(()) => println!("  {} {}", "✓".green(), action),
        Err(err) => println!("  {} {}: {}", "✗".red(), action, err),
    }
}

fn section(title: &str) {
    println!();
    println!("{}", title.bright_white().bold());
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("  {}", line);
    }
}
