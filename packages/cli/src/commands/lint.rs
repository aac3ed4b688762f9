use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use folio_common::Settings;
use folio_linter::{lint_document, Diagnostic, DiagnosticLevel, LintOptions};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::open_document;

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Document snapshot (.json) or directory of snapshots
    pub input: PathBuf,

    /// Show all diagnostics including info level
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Default)]
struct Totals {
    diagnostics: usize,
    errors: usize,
    warnings: usize,
    files: usize,
}

pub fn lint(args: LintArgs, _settings: &Settings) -> Result<()> {
    let files = if args.input.is_file() {
        vec![args.input.clone()]
    } else if args.input.is_dir() {
        find_snapshots(&args.input)
    } else {
        return Err(anyhow::anyhow!(
            "Input path does not exist: {}",
            args.input.display()
        ));
    };

    let mut totals = Totals::default();
    for file in &files {
        let diagnostics = match open_document(file) {
            Ok(doc) => lint_document(doc.root(), LintOptions::default()),
            Err(err) => {
                eprintln!("{} {:#}", "✗".red(), err);
                totals.errors += 1;
                totals.files += 1;
                continue;
            }
        };

        totals.files += 1;
        totals.diagnostics += diagnostics.len();
        totals.errors += count(&diagnostics, DiagnosticLevel::Error);
        totals.warnings += count(&diagnostics, DiagnosticLevel::Warning);

        if args.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&diagnostics)?);
        } else {
            print_diagnostics(file, &diagnostics, args.verbose);
        }
    }

    if args.format == OutputFormat::Text {
        print_summary(&totals);
    }

    if totals.errors > 0 {
        return Err(anyhow::anyhow!("{} lint error(s)", totals.errors));
    }
    Ok(())
}

fn count(diagnostics: &[Diagnostic], level: DiagnosticLevel) -> usize {
    diagnostics.iter().filter(|d| d.level == level).count()
}

fn print_diagnostics(file: &Path, diagnostics: &[Diagnostic], verbose: bool) {
    if diagnostics.is_empty() {
        if verbose {
            println!("{} {}", "✓".green(), file.display());
        }
        return;
    }

    println!("{}", file.display());
    for diagnostic in diagnostics {
        if !verbose && diagnostic.level == DiagnosticLevel::Info {
            continue;
        }

        let level = match diagnostic.level {
            DiagnosticLevel::Error => "error".red().bold(),
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };
        println!(
            "  {} [{}] {} {}",
            level,
            diagnostic.rule,
            diagnostic.path.to_string().dimmed(),
            diagnostic.message
        );

        if let Some(suggestion) = &diagnostic.suggestion {
            println!("    {} {}", "help:".dimmed(), suggestion.dimmed());
        }
    }
    println!();
}

fn print_summary(totals: &Totals) {
    println!(
        "{} Linting complete",
        if totals.errors > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Files checked: {}", totals.files);
    println!("   Total diagnostics: {}", totals.diagnostics);

    if totals.errors > 0 {
        println!("   {} {}", "Errors:".red(), totals.errors);
    }
    if totals.warnings > 0 {
        println!("   {} {}", "Warnings:".yellow(), totals.warnings);
    }
    if totals.errors == 0 && totals.warnings == 0 {
        println!("   {} No issues found!", "✓".green());
    }
}

fn find_snapshots(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false))
        .collect()
}
