//! Command-line interface for versemap.
//!
//! - **resolve**: print the canonical verses for some reference text
//! - **create**: resolve, compute highlight regions and save a record
//! - **list** / **show**: read saved records back
//!
//! ## Usage
//!
//! ```text
//! # Typed references
//! versemap resolve --refs "Jn 3:16; Romans 8:28-39, Gen 1-3"
//!
//! # A reference list, one per line, taken verbatim
//! versemap resolve --file passages.txt --list
//!
//! # Save a project
//! versemap create --name advent --file passages.txt --refs "Isa 9:6"
//! ```

use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use versemap::bible::{ReferenceResolver, ReferenceSet};
use versemap::config::Config;
use versemap::corpus::Corpus;
use versemap::types::InputMode;

pub mod records;
pub mod resolve;

#[derive(Parser)]
#[command(name = "versemap")]
#[command(version)]
#[command(about = "Resolve Bible references and map them onto the full-text layout")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Verse corpus CSV (overrides VERSEMAP_CORPUS)
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// Record store JSON file (overrides VERSEMAP_DATA_FILE)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the verses a set of references resolves to
    Resolve(InputArgs),

    /// Resolve references and save them with their highlight regions
    Create(records::CreateArgs),

    /// List saved records
    List,

    /// Show one saved record
    Show {
        /// Record id
        id: String,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Reference sources shared by `resolve` and `create`.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// File of references; use '-' for stdin
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Treat the file as a plain list, one reference per line, kept verbatim
    #[arg(long)]
    pub list: bool,

    /// Typed reference text, separated by commas, semicolons or newlines
    #[arg(long)]
    pub refs: Option<String>,

    /// Resolve the typed text before the file
    #[arg(long)]
    pub typed_first: bool,
}

/// Load configuration and apply command-line overrides.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load()?;
    if let Some(corpus) = &cli.corpus {
        config.corpus_path.clone_from(corpus);
    }
    if let Some(data_file) = &cli.data_file {
        config.data_file.clone_from(data_file);
    }
    Ok(config)
}

/// Load the corpus and build a resolver over its verse counts.
pub fn load_engine(config: &Config) -> anyhow::Result<(Corpus, ReferenceResolver)> {
    let path = config.check_corpus()?;
    let corpus = Corpus::load(path)
        .with_context(|| format!("Failed to load corpus {}", path.display()))?;
    let index = corpus.verse_counts();
    tracing::debug!("Indexed verse counts for {} books", index.book_count());
    let resolver = ReferenceResolver::new(Arc::new(index));
    Ok((corpus, resolver))
}

/// Resolve the file and typed sources in the configured order.
pub fn collect_references(
    resolver: &ReferenceResolver,
    input: &InputArgs,
    config: &Config,
) -> anyhow::Result<Vec<String>> {
    let from_file = match &input.file {
        Some(path) => read_file_source(resolver, path, input.list)?,
        None => Vec::new(),
    };
    let from_typed =
        input.refs.as_deref().map(|text| resolver.parse_references(text)).unwrap_or_default();

    let mut out = ReferenceSet::new();
    if input.typed_first || config.typed_first {
        out.extend(from_typed);
        out.extend(from_file);
    } else {
        out.extend(from_file);
        out.extend(from_typed);
    }
    Ok(out.into_vec())
}

fn read_file_source(
    resolver: &ReferenceResolver,
    path: &Path,
    list: bool,
) -> anyhow::Result<Vec<String>> {
    let mode = if list { InputMode::PlainList } else { InputMode::References };
    if path == Path::new("-") {
        return resolver
            .read_source(std::io::stdin().lock(), mode)
            .context("Failed to read references from stdin");
    }
    let file = fs_err::File::open(path)?;
    resolver
        .read_source(BufReader::new(file), mode)
        .with_context(|| format!("Failed to read references from {}", path.display()))
}
