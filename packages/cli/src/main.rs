mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    demo, export, lint, render, stats, DemoArgs, ExportArgs, LintArgs, RenderArgs, StatsArgs,
};
use std::path::PathBuf;

/// Folio CLI - build, render and inspect folio documents
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (defaults to ./folio.config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a sample document and walk through every feature
    Demo(DemoArgs),

    /// Render a document snapshot as plain text or HTML
    Render(RenderArgs),

    /// Print element and word counts of a document snapshot
    Stats(StatsArgs),

    /// Export a document snapshot as XML
    Export(ExportArgs),

    /// Check document snapshots for structural problems
    Lint(LintArgs),
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = config::load_settings(&cwd, cli.config.as_deref())?;

    match cli.command {
        Command::Demo(args) => demo(args, &settings),
        Command::Render(args) => render(args, &settings),
        Command::Stats(args) => stats(args, &settings),
        Command::Export(args) => export(args, &settings),
        Command::Lint(args) => lint(args, &settings),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
