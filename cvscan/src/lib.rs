//! cvscan - keyword screening over a cached CV corpus
//!
//! A corpus of `<category>/<file>` documents is extracted once into a
//! `DocumentCache`. Searches compile the keyword set for one engine (KMP,
//! Boyer-Moore, Aho-Corasick, or bounded-Levenshtein fuzzy matching), fan the
//! matcher out over every cached document on a rayon pool, and return the
//! documents ranked by match count.

mod cache;
pub mod config;
pub mod extract;
pub mod interface;
pub mod matcher;
pub mod models;
mod scanner;
mod search;
pub mod summary;

pub use cache::DocumentCache;
pub use config::ScanConfig;
pub use extract::{ExtractError, PlainTextExtractor, TextExtractor};
pub use interface::*;
pub use matcher::{CompiledMatcher, Matcher};
pub use scanner::Scanner;
pub use summary::CvSummary;
