//! cvscan Public Interface
//!
//! Types shared by the library, the `cvscan` binary and any front end that
//! drives the scanner. This file is the source of truth for those types.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// ENUMS
// ═══════════════════════════════════════════════════════════════════════════════

/// Exact-match algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    /// Knuth-Morris-Pratt, one pass per keyword
    Kmp,
    /// Boyer-Moore with bad-character and good-suffix shifts, one pass per keyword
    BoyerMoore,
    /// Aho-Corasick automaton, one pass for the whole keyword set
    AhoCorasick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Kmp, Algorithm::BoyerMoore, Algorithm::AhoCorasick];

    /// Short name accepted by `FromStr`
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Kmp => "KMP",
            Algorithm::BoyerMoore => "BM",
            Algorithm::AhoCorasick => "AC",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "KMP" => Ok(Algorithm::Kmp),
            "BM" => Ok(Algorithm::BoyerMoore),
            "AC" => Ok(Algorithm::AhoCorasick),
            _ => Err(ScanError::InvalidAlgorithm(s.to_string())),
        }
    }
}

/// Which engine produced a search report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchEngineKind {
    Exact { algorithm: Algorithm },
    Fuzzy { max_distance: usize },
}

impl fmt::Display for SearchEngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchEngineKind::Exact { algorithm } => write!(f, "{algorithm}"),
            SearchEngineKind::Fuzzy { max_distance } => write!(f, "fuzzy(<= {max_distance})"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS (Structs)
// ═══════════════════════════════════════════════════════════════════════════════

/// Stable identity of a cached document: `<category>/<file>` relative to the corpus root
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(category: &str, file_name: &str) -> Self {
        Self(format!("{category}/{file_name}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The category directory this document was found in
    pub fn category(&self) -> &str {
        self.0.split_once('/').map_or("", |(category, _)| category)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One ranked hit. `count` is always > 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub document: DocumentId,
    pub count: usize,
}

/// Search result container
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// Ranked hits, descending by count, at most `limit` long
    pub matches: Vec<MatchResult>,
    pub engine: SearchEngineKind,
    /// Documents the matcher ran against
    pub documents_scanned: usize,
    /// Documents whose matcher run failed and were left out of `matches`
    pub failed_documents: usize,
    #[serde(serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl SearchReport {
    /// `(document, count)` pairs in rank order
    pub fn pairs(&self) -> Vec<(&str, usize)> {
        self.matches.iter().map(|m| (m.document.as_str(), m.count)).collect()
    }
}

/// Outcome of loading a corpus into the document cache
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub loaded: usize,
    pub failed: usize,
    pub categories: usize,
    #[serde(serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

/// Error type for scanner operations
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid algorithm '{0}'. Must be 'KMP', 'BM' or 'AC'")]
    InvalidAlgorithm(String),
    #[error("Document cache is empty or not initialized")]
    NotInitialized,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Cannot read corpus root {path}: {source}")]
    CorpusRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config error: {0}")]
    Config(String),
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScanResult<T> = Result<T, ScanError>;

impl From<rayon::ThreadPoolBuildError> for ScanError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        ScanError::ThreadPool(e.to_string())
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(e: serde_json::Error) -> Self {
        ScanError::Config(e.to_string())
    }
}

/// Split a free-text keyword field ("java, python; sql") into terms.
/// Separators are commas, semicolons and newlines; empty terms are dropped.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(|c| matches!(c, ',' | ';' | '\n' | '\r'))
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
