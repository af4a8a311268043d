use anyhow::{bail, Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use paperdoc::{global, Document, Parser, ParserRegistry};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;
use walkdir::WalkDir;

/// Inspect and load documents through the parser registry
#[derive(ClapParser, Debug)]
#[command(name = "paperdoc", version, about)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered formats and the file-dialog filter string
    Formats,
    /// Show which parser handles an extension
    Find {
        /// Extension with or without the leading dot
        extension: String,
    },
    /// Load a document and print a summary
    Load {
        path: PathBuf,
        /// Print the whole document as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Walk a directory and report the parser selected for each file
    Scan {
        dir: PathBuf,
        /// Also list files no parser claims
        #[arg(long, default_value_t = false)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("paperdoc={}", log_level))),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = global();
    match cli.command {
        Command::Formats => formats(registry),
        Command::Find { extension } => find(registry, &extension),
        Command::Load { path, json } => load(registry, &path, json),
        Command::Scan { dir, all } => scan(registry, &dir, all),
    }
}

fn formats(registry: &ParserRegistry) -> Result<()> {
    println!("=== Registered Parsers ===");
    for parser in registry.all() {
        let extensions = parser.extensions();
        let extensions = if extensions.is_empty() {
            "(unavailable)".to_string()
        } else {
            extensions.join(", ")
        };
        let flags = parser.flags().names();
        println!(
            "  {:<24} {:<20} [{}]",
            parser.name(),
            extensions,
            flags.join(", ")
        );
    }

    println!("\n=== Wildcards ===");
    println!("{}", registry.supported_wildcards());
    Ok(())
}

fn find(registry: &ParserRegistry, extension: &str) -> Result<()> {
    match registry.find_by_extension(extension) {
        Some(parser) => {
            println!("{}", parser.name());
            Ok(())
        }
        None => bail!("no active parser claims '{}'", extension),
    }
}

fn load(registry: &ParserRegistry, path: &Path, json: bool) -> Result<()> {
    let start = Instant::now();
    let loaded = registry.load(path)?;
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "load finished");

    for warning in &loaded.warnings {
        eprintln!("warning: {}", warning);
    }

    if json {
        let out = serde_json::to_string_pretty(&loaded.document)
            .context("Failed to serialize document")?;
        println!("{}", out);
    } else {
        print_summary(&loaded.document);
    }
    Ok(())
}

fn print_summary(doc: &Document) {
    println!("Title:        {}", doc.title.as_deref().unwrap_or("(untitled)"));
    if let Some(author) = &doc.author {
        println!("Author:       {}", author);
    }
    println!("Characters:   {}", doc.text.chars().count());
    println!("Lines:        {}", doc.text.lines().count());
    println!("Headings:     {}", doc.heading_count());
    println!("Sections:     {}", doc.section_count());
    println!("List items:   {}", doc.list_item_count());

    if !doc.toc.is_empty() {
        println!("\nTable of contents:");
        print_toc(&doc.toc, 1);
    }
}

fn print_toc(items: &[paperdoc::TocItem], depth: usize) {
    for item in items {
        println!("{}{}", "  ".repeat(depth), item.name);
        print_toc(&item.children, depth + 1);
    }
}

fn scan(registry: &ParserRegistry, dir: &Path, all: bool) -> Result<()> {
    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let mut matched = 0;
    let mut unmatched = 0;
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        match registry.find_for_path(entry.path()) {
            Some(parser) => {
                matched += 1;
                println!("  {} [{}]", relative.display(), parser.name());
            }
            None => {
                unmatched += 1;
                if all {
                    println!("  {} [-]", relative.display());
                }
            }
        }
    }

    println!("\n{} supported, {} unsupported", matched, unmatched);
    Ok(())
}
