//! Keyword matchers
//!
//! Every engine answers one question: how many keyword occurrences are in this
//! text? `CompiledMatcher` is the tagged form the orchestrator dispatches on.
//! KMP and Boyer-Moore compile one matcher per keyword and scan the text once
//! per keyword; Aho-Corasick compiles the whole set into one automaton and
//! scans once. The orchestrator only sees `Matcher::count`.

mod aho_corasick;
mod boyer_moore;
mod fuzzy;
mod kmp;

pub use aho_corasick::AhoCorasick;
pub use boyer_moore::BoyerMoore;
pub use fuzzy::{edit_distance_bounded, levenshtein, FuzzyMatcher};
pub use kmp::Kmp;

use crate::interface::Algorithm;

/// Compile once, count in many texts. Implementations are shared across worker threads.
pub trait Matcher: Send + Sync {
    /// Total occurrences of the compiled keyword set in `text`
    fn count(&self, text: &str) -> usize;
}

/// An exact-match keyword set compiled for one algorithm.
#[derive(Debug, Clone)]
pub enum CompiledMatcher {
    Kmp(Vec<Kmp>),
    BoyerMoore(Vec<BoyerMoore>),
    AhoCorasick(AhoCorasick),
}

impl CompiledMatcher {
    /// Compile `keywords` for `algorithm`. Empty keywords are dropped; duplicates are kept
    /// and counted once per entry by every algorithm.
    pub fn compile<S: AsRef<str>>(algorithm: Algorithm, keywords: &[S]) -> Self {
        let patterns = keywords.iter().map(|k| k.as_ref()).filter(|k| !k.is_empty());
        match algorithm {
            Algorithm::Kmp => CompiledMatcher::Kmp(patterns.map(Kmp::new).collect()),
            Algorithm::BoyerMoore => CompiledMatcher::BoyerMoore(patterns.map(BoyerMoore::new).collect()),
            Algorithm::AhoCorasick => {
                let patterns: Vec<&str> = patterns.collect();
                CompiledMatcher::AhoCorasick(AhoCorasick::new(&patterns))
            }
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            CompiledMatcher::Kmp(_) => Algorithm::Kmp,
            CompiledMatcher::BoyerMoore(_) => Algorithm::BoyerMoore,
            CompiledMatcher::AhoCorasick(_) => Algorithm::AhoCorasick,
        }
    }

    pub fn keyword_count(&self) -> usize {
        match self {
            CompiledMatcher::Kmp(patterns) => patterns.len(),
            CompiledMatcher::BoyerMoore(patterns) => patterns.len(),
            CompiledMatcher::AhoCorasick(automaton) => automaton.keyword_count(),
        }
    }

    /// Text passes per document: one per keyword for KMP/BM, one in total for AC
    pub fn passes_per_text(&self) -> usize {
        match self {
            CompiledMatcher::AhoCorasick(automaton) => usize::from(automaton.keyword_count() > 0),
            _ => self.keyword_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keyword_count() == 0
    }
}

impl Matcher for CompiledMatcher {
    fn count(&self, text: &str) -> usize {
        match self {
            CompiledMatcher::Kmp(patterns) => patterns.iter().map(|p| p.count_in(text)).sum(),
            CompiledMatcher::BoyerMoore(patterns) => patterns.iter().map(|p| p.count_in(text)).sum(),
            CompiledMatcher::AhoCorasick(automaton) => automaton.count_in(text),
        }
    }
}
