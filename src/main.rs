// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! Command-line entry point: reads newline-delimited [`WiktionaryPage`]
//! JSON from a file (or stdin), extracts edges from each, and writes
//! newline-delimited [`Edge`] JSON to a file (or stdout).

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use wikt_graph::io::{read_pages, write_edges};
use wikt_graph::language::Language;
use wikt_graph::oracle::{CachedTitleOracle, SqliteTitleOracle, TitleOracle};
use wikt_graph::walker::parse_entry;

#[derive(Parser)]
#[command(name = "wikt-graph", about = "Extract a lexical-semantic knowledge graph from Wiktionary entries")]
struct Args {
    /// Newline-delimited JSON file of {title, wikitext} pages. Reads stdin if omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Newline-delimited JSON file of edges to write. Writes stdout if omitted.
    #[arg(long)]
    output: Option<PathBuf>,

    /// SQLite database backing the title-existence oracle (§6). If omitted,
    /// every lookup reports "not found", which disables cross-edition
    /// default-language disambiguation but otherwise parses normally.
    #[arg(long)]
    titles: Option<PathBuf>,

    /// The Wiktionary edition every input page is drawn from. Section
    /// headings are in this edition's language regardless of which
    /// `==Language==` a given entry documents (the English edition
    /// describes French words under English subheadings like "Noun" and
    /// "Translations"), so this selects the dispatch tables once for the
    /// whole run rather than per entry.
    #[arg(long, value_enum, default_value = "en")]
    language: Language,

    /// Emit a trace-level log line for every section visited.
    #[arg(long)]
    trace: bool,

    /// Abort on the first entry failure instead of logging and skipping it.
    #[arg(long)]
    strict: bool,
}

struct NullOracle;

impl TitleOracle for NullOracle {
    fn exists(&self, _language: &str, _title: &str) -> Result<bool, wikt_graph::WiktGraphError> {
        Ok(false)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let oracle: Box<dyn TitleOracle> = match &args.titles {
        Some(path) => {
            let sqlite = SqliteTitleOracle::open(path).with_context(|| format!("opening {}", path.display()))?;
            sqlite.create_schema()?;
            Box::new(CachedTitleOracle::new(sqlite, std::num::NonZeroUsize::new(10_000).unwrap()))
        }
        None => Box::new(NullOracle),
    };

    let input: Box<dyn io::BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut output: Box<dyn io::Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let mut entry_count = 0u64;
    let mut edge_count = 0u64;

    for page in read_pages(input) {
        let page = page.context("reading input page")?;
        match parse_entry(oracle.as_ref(), &page.title, &page.wikitext, args.language, args.trace) {
            Ok(edges) => {
                edge_count += edges.len() as u64;
                write_edges(&mut output, &edges).context("writing edges")?;
            }
            Err(err) if args.strict => {
                return Err(err).with_context(|| format!("entry {:?}", page.title));
            }
            Err(err) => {
                log::warn!("skipping entry {:?}: {err}", page.title);
            }
        }
        entry_count += 1;
    }

    log::info!("processed {entry_count} entries, emitted {edge_count} edges");
    Ok(())
}
