//! Command-line front end for kvectordb.
//!
//! Each invocation builds a fresh in-memory database from its arguments,
//! runs one command, and exits. Nothing is kept between runs.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::debug;

use kvectordb_retrieval::{DatabaseConfig, Document, SearchHit, VectorDatabase};

/// Sample documents loaded by `kvectordb demo`.
pub const DEMO_DOCUMENTS: [(&str, &str); 5] = [
    ("doc1", "I database vettoriali sono utili per la ricerca semantica"),
    ("doc2", "I motori di ricerca utilizzano tecnologie di embedding"),
    ("doc3", "L'intelligenza artificiale rivoluziona il recupero delle informazioni"),
    ("doc4", "Le reti neurali generano embedding di alta qualità"),
    ("doc5", "La similarità coseno misura quanto due vettori sono simili"),
];

/// Queries run by `kvectordb demo`.
pub const DEMO_QUERIES: [&str; 3] = [
    "database semantici",
    "intelligenza artificiale e reti neurali",
    "similarità tra vettori",
];

/// In-memory vector similarity store.
#[derive(Parser, Debug)]
#[command(name = "kvectordb", version, about = "In-memory vector similarity store")]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Embedding dimension (overrides the configuration file).
    #[arg(long, global = true)]
    pub dimension: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load sample documents and run example searches.
    Demo,

    /// Rank documents against a query.
    Search {
        /// Query text.
        query: String,

        /// Document to index, as ID=TEXT. Repeatable.
        #[arg(short = 'd', long = "doc", value_parser = parse_doc)]
        docs: Vec<DocArg>,

        /// Maximum number of results (defaults to the configured limit).
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the embedding of a text.
    Embed {
        text: String,

        /// Print the vector as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List documents in insertion order.
    List {
        /// Document to index, as ID=TEXT. Repeatable.
        #[arg(short = 'd', long = "doc", value_parser = parse_doc)]
        docs: Vec<DocArg>,
    },
}

/// A document given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocArg {
    pub id: String,
    pub text: String,
}

/// Parse `ID=TEXT`. The text may itself contain `=` and may be empty.
pub fn parse_doc(raw: &str) -> std::result::Result<DocArg, String> {
    let (id, text) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=TEXT, got `{raw}`"))?;
    if id.is_empty() {
        return Err(format!("document id is empty in `{raw}`"));
    }
    Ok(DocArg {
        id: id.to_string(),
        text: text.to_string(),
    })
}

/// Format one ranked result, e.g. `1. [ID: doc1, Score: 0.9731] text`.
pub fn format_hit(rank: usize, hit: &SearchHit<'_>) -> String {
    format!(
        "{rank}. [ID: {}, Score: {:.4}] {}",
        hit.document.id(),
        hit.score,
        hit.document.text()
    )
}

pub fn format_document(document: &Document) -> String {
    format!("Document ID: {}, Text: {}", document.id(), document.text())
}

pub fn format_vector(vector: &[f64]) -> String {
    let components: Vec<String> = vector.iter().map(|x| format!("{x:.4}")).collect();
    format!("[{}]", components.join(", "))
}

/// Resolve the configuration from `--config` and `--dimension`.
pub fn load_config(cli: &Cli) -> Result<DatabaseConfig> {
    let mut config = match &cli.config {
        Some(path) => DatabaseConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DatabaseConfig::default(),
    };
    if let Some(dimension) = cli.dimension {
        config = config.with_dimension(dimension);
    }
    Ok(config)
}

fn build_database(config: DatabaseConfig, docs: &[DocArg]) -> Result<VectorDatabase> {
    let mut db = VectorDatabase::from_config(config).context("invalid configuration")?;
    for doc in docs {
        db.insert(doc.id.as_str(), doc.text.as_str());
    }
    debug!("Indexed {} documents", db.size());
    Ok(db)
}

fn write_hits(out: &mut impl Write, hits: &[SearchHit<'_>]) -> Result<()> {
    for (index, hit) in hits.iter().enumerate() {
        writeln!(out, "{}", format_hit(index + 1, hit))?;
    }
    Ok(())
}

/// Run a parsed command, writing results to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Command::Demo => {
            writeln!(out, "Adding documents to the database...")?;
            let docs: Vec<DocArg> = DEMO_DOCUMENTS
                .iter()
                .map(|(id, text)| DocArg {
                    id: (*id).to_string(),
                    text: (*text).to_string(),
                })
                .collect();
            let db = build_database(config, &docs)?;
            writeln!(out, "Documents in database: {}", db.size())?;

            for (index, query) in DEMO_QUERIES.iter().enumerate() {
                writeln!(out)?;
                writeln!(out, "Search {}: '{query}'", index + 1)?;
                let hits = db.search_default(query)?;
                write_hits(out, &hits)?;
            }
        }
        Command::Search {
            query,
            docs,
            limit,
            json,
        } => {
            let db = build_database(config, &docs)?;
            let hits = match limit {
                Some(limit) => db.search(&query, limit)?,
                None => db.search_default(&query)?,
            };
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&hits)?)?;
            } else if hits.is_empty() {
                writeln!(out, "No documents to search.")?;
            } else {
                write_hits(out, &hits)?;
            }
        }
        Command::Embed { text, json } => {
            let db = build_database(config, &[])?;
            let vector = db.embed(&text);
            if json {
                writeln!(out, "{}", serde_json::to_string(&vector)?)?;
            } else {
                writeln!(out, "{}", format_vector(&vector))?;
            }
        }
        Command::List { docs } => {
            let db = build_database(config, &docs)?;
            if db.is_empty() {
                return Err(anyhow!("no documents given; pass one or more --doc ID=TEXT"));
            }
            for document in db.documents() {
                writeln!(out, "{}", format_document(document))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_parse_doc() {
        assert_eq!(
            parse_doc("d1=hello=world").unwrap(),
            DocArg {
                id: "d1".to_string(),
                text: "hello=world".to_string()
            }
        );
        assert_eq!(parse_doc("d1=").unwrap().text, "");
        assert!(parse_doc("no separator").is_err());
        assert!(parse_doc("=text").is_err());
    }

    #[test]
    fn test_format_hit_uses_four_decimals() {
        let mut db = VectorDatabase::new();
        db.insert("d1", "");
        let hits = db.search("x", 1).unwrap();
        assert_eq!(format_hit(1, &hits[0]), "1. [ID: d1, Score: 0.0000] ");
    }

    #[test]
    fn test_format_vector() {
        assert_eq!(format_vector(&[0.5, 0.0, 1.0]), "[0.5000, 0.0000, 1.0000]");
    }

    #[test]
    fn test_search_command() {
        let output = run_args(&[
            "kvectordb", "search", "cab", "--doc", "d1=cab", "--doc", "d2=abc",
        ])
        .unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "1. [ID: d1, Score: 1.0000] cab");
        assert!(lines[1].starts_with("2. [ID: d2, Score: "));
    }

    #[test]
    fn test_search_limit() {
        let output = run_args(&[
            "kvectordb", "search", "a", "-d", "x=a", "-d", "y=b", "-d", "z=c", "--limit", "1",
        ])
        .unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_search_empty_store() {
        let output = run_args(&["kvectordb", "search", "anything"]).unwrap();
        assert_eq!(output, "No documents to search.\n");
    }

    #[test]
    fn test_search_json() {
        let output = run_args(&["kvectordb", "search", "x", "--doc", "d1=", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value[0]["document"]["id"], "d1");
        assert_eq!(value[0]["score"], 0.0);
    }

    #[test]
    fn test_embed_command() {
        let output = run_args(&["kvectordb", "embed", "", "--json"]).unwrap();
        assert_eq!(output, "[0.0,0.0,0.0,0.0,0.0]\n");

        let output = run_args(&["kvectordb", "--dimension", "3", "embed", "abc"]).unwrap();
        assert_eq!(output.matches(", ").count(), 2);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(run_args(&["kvectordb", "--dimension", "0", "embed", "abc"]).is_err());
    }

    #[test]
    fn test_list_command() {
        let output = run_args(&["kvectordb", "list", "-d", "b=second", "-d", "a=first"]).unwrap();
        assert_eq!(
            output,
            "Document ID: b, Text: second\nDocument ID: a, Text: first\n"
        );
        assert!(run_args(&["kvectordb", "list"]).is_err());
    }

    #[test]
    fn test_demo_command() {
        let output = run_args(&["kvectordb", "demo"]).unwrap();

        assert!(output.contains("Documents in database: 5"));
        assert!(output.contains("Search 1: 'database semantici'"));
        assert!(output.contains("Search 3: 'similarità tra vettori'"));
        // Three searches, each ranking all five documents.
        assert_eq!(output.matches("[ID: ").count(), 15);
    }

    #[test]
    fn test_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kvectordb.toml");
        std::fs::write(&path, "default_limit = 2\n").unwrap();

        let output = run_args(&[
            "kvectordb",
            "--config",
            path.to_str().unwrap(),
            "search",
            "a",
            "-d",
            "x=a",
            "-d",
            "y=b",
            "-d",
            "z=c",
        ])
        .unwrap();
        assert_eq!(output.lines().count(), 2);
    }
}
