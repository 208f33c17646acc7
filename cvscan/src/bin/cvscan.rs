//! cvscan command line front end
//!
//! Loads a `<category>/<file>` corpus once, then runs one search or lookup
//! against it and prints the ranked result.
//!
//! Run with: cargo run --release --bin cvscan -- --corpus ./data exact -a AC "java, python"
//! Logging follows RUST_LOG (default `cvscan=info`) and goes to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cvscan::config::{DEFAULT_LIMIT, DEFAULT_MAX_DISTANCE};
use cvscan::{parse_keywords, Algorithm, CorpusStats, DocumentId, ScanConfig, Scanner, SearchReport};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Corpus root holding one directory per category
    #[arg(short, long, default_value = "data")]
    corpus: PathBuf,

    /// JSON scanner config; defaults apply when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of a table
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank documents by exact keyword occurrences
    Exact {
        /// KMP, BM or AC
        #[arg(short, long, default_value = "KMP")]
        algorithm: Algorithm,

        /// Number of documents to show (config default when omitted)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Keywords; each argument may hold several separated by commas or semicolons
        #[arg(required = true)]
        keywords: Vec<String>,
    },
    /// Rank documents by words within an edit distance of the keywords
    Fuzzy {
        /// Maximum Levenshtein distance (config default when omitted)
        #[arg(short = 'd', long)]
        max_distance: Option<usize>,

        #[arg(short, long)]
        limit: Option<usize>,

        #[arg(required = true)]
        keywords: Vec<String>,
    },
    /// Show skills, jobs and education parsed from one document
    Summary {
        /// Document id, `<category>/<file>`
        id: String,
    },
    /// List every cached document id
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cvscan=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ScanConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => ScanConfig::default(),
    };
    let default_limit = config.default_limit;
    let default_distance = config.default_max_distance;

    let scanner = Scanner::new(config).context("starting scanner")?;
    let stats = scanner
        .initialize(&args.corpus)
        .with_context(|| format!("loading corpus {}", args.corpus.display()))?;
    print_stats(&stats, args.json);

    match args.command {
        Command::Exact {
            algorithm,
            limit,
            keywords,
        } => {
            let keywords = split_keywords(&keywords);
            let report = scanner.search_exact(&keywords, algorithm, limit.unwrap_or(default_limit))?;
            print_report(&report, args.json)?;
        }
        Command::Fuzzy {
            max_distance,
            limit,
            keywords,
        } => {
            let keywords = split_keywords(&keywords);
            let report = scanner.search_fuzzy(
                &keywords,
                max_distance.unwrap_or(default_distance),
                limit.unwrap_or(default_limit),
            )?;
            print_report(&report, args.json)?;
        }
        Command::Summary { id } => {
            let id = DocumentId::from(id.as_str());
            let summary = scanner
                .summary(&id)
                .with_context(|| format!("no cached document {id}"))?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Skills: {}", summary.skills.join(", "));
                for job in &summary.jobs {
                    println!("Job: {} - {}  {}", job.start, job.end, job.position);
                }
                for edu in &summary.education {
                    println!("Education: {} - {}  {}, {}", edu.start, edu.end, edu.institution, edu.degree);
                }
            }
        }
        Command::List => {
            let ids = scanner.document_ids();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&ids)?);
            } else {
                for id in ids {
                    println!("{id}");
                }
            }
        }
    }

    Ok(())
}

fn split_keywords(args: &[String]) -> Vec<String> {
    args.iter().flat_map(|arg| parse_keywords(arg)).collect()
}

fn print_stats(stats: &CorpusStats, json: bool) {
    // Table output only; JSON consumers get the stats through the log
    if !json {
        eprintln!(
            "Loaded {} documents ({} failed) from {} categories in {:?}",
            stats.loaded, stats.failed, stats.categories, stats.elapsed
        );
    }
}

fn print_report(report: &SearchReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    if report.matches.is_empty() {
        println!("No matches ({} documents scanned)", report.documents_scanned);
    } else {
        println!("{:>4}  {:>6}  DOCUMENT", "RANK", "COUNT");
        for (rank, hit) in report.matches.iter().enumerate() {
            println!("{:>4}  {:>6}  {}", rank + 1, hit.count, hit.document);
        }
    }
    println!(
        "{} search over {} documents took {:.2} ms",
        report.engine,
        report.documents_scanned,
        report.elapsed.as_secs_f64() * 1000.0
    );
    if report.failed_documents > 0 {
        println!("{} documents could not be searched", report.failed_documents);
    }
    Ok(())
}
