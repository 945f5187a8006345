//! Wikigraph CLI: imports a wiki XML dump and answers path queries.
//!
//! Usage:
//!   wikigraph <dump.xml>          import, then read queries from stdin
//!   wikigraph <dump.xml> --dump   import, print the ontology as JSON

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use wikigraph::graph::LinkEdges;
use wikigraph::pipeline::{Article, ArticleSink, OntologyBuilder};
use wikigraph::query::{render_error, render_path, FilterRegistry, GraphSet, QuerySession};
use wikigraph::{ArticleSource, Ontology, XmlDumpReader};

#[derive(Parser)]
#[command(
    name = "wikigraph",
    version,
    about = "Wiki ontology extractor with filtered shortest-path queries"
)]
struct Cli {
    /// Path to the wiki XML dump
    input: PathBuf,

    /// Print the imported ontology as JSON instead of entering the query loop
    #[arg(long)]
    dump: bool,
}

/// Reports each rejected article on stderr, keeping stdout for results
struct TitlePrinter;

impl ArticleSink for TitlePrinter {
    fn accept(&mut self, article: &Article) {
        eprintln!("Filtered out article {}.", article.title);
    }
}

/// Import the dump; a source failure aborts the run
fn import(input: &PathBuf) -> Result<Ontology, i32> {
    let mut source = match XmlDumpReader::open(input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Cannot read the input file.");
            eprintln!("{}", e);
            return Err(1);
        }
    };

    let mut builder = OntologyBuilder::standard();
    builder.set_rejected_sink(TitlePrinter);

    loop {
        match source.next_article() {
            Ok(Some(article)) => {
                builder.consume(article);
            }
            Ok(None) => break,
            Err(e) => {
                eprintln!("Cannot read the input file.");
                eprintln!("{}", e);
                return Err(1);
            }
        }
    }

    eprintln!(
        "Imported {} entities ({} rejected).",
        builder.entity_count(),
        builder.rejected_count()
    );
    Ok(builder.finish())
}

/// Blocking query loop: one query per line, blank line or EOF ends it
fn query_loop(session: &QuerySession) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        match session.run_line(&line) {
            Ok(result) => writeln!(stdout, "{}", render_path(&result))?,
            Err(e) => writeln!(stdout, "{}", render_error(&e))?,
        }
        stdout.flush()?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let ontology = match import(&cli.input) {
        Ok(ontology) => ontology,
        Err(code) => std::process::exit(code),
    };

    if cli.dump {
        if let Err(e) = serde_json::to_writer_pretty(io::stdout().lock(), &ontology) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        println!();
        return;
    }

    let registry = FilterRegistry::with_defaults();
    let session = QuerySession::new(GraphSet::build_all(&ontology, &registry, &LinkEdges));

    if let Err(e) = query_loop(&session) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
