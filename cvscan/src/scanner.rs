//! Scanner - main API for front ends
//!
//! Owns the worker pool and a handle to the document cache, and exposes the
//! three entry points: `initialize`, `search_exact` and `search_fuzzy`.
//!
//! Concurrency Model:
//! - The cache sits behind a `parking_lot::RwLock`. Searches take a read guard
//!   for the whole fan-out, so workers borrow documents without further locking.
//! - `initialize` loads a complete new cache outside the lock, then swaps it in
//!   under the write guard. Searches never see a half-built corpus.
//! - Matching is CPU-bound; the pool defaults to one thread per core.

use crate::cache::DocumentCache;
use crate::config::ScanConfig;
use crate::extract::{PlainTextExtractor, TextExtractor};
use crate::interface::{
    Algorithm, CorpusStats, DocumentId, ScanError, ScanResult, SearchEngineKind, SearchReport,
};
use crate::matcher::{CompiledMatcher, FuzzyMatcher};
use crate::search;
use crate::summary::{extract_summary, CvSummary};
use parking_lot::RwLock;
use rayon::ThreadPool;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Thread-safe corpus scanner
pub struct Scanner {
    cache: Arc<RwLock<DocumentCache>>,
    extractor: Arc<dyn TextExtractor>,
    pool: ThreadPool,
    config: ScanConfig,
}

impl Scanner {
    /// Scanner over a fresh, uninitialized cache
    pub fn new(config: ScanConfig) -> ScanResult<Self> {
        Self::with_cache(Arc::new(RwLock::new(DocumentCache::new())), config)
    }

    /// Scanner over an existing cache. Several scanners may share one cache.
    pub fn with_cache(cache: Arc<RwLock<DocumentCache>>, config: ScanConfig) -> ScanResult<Self> {
        config.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.worker_count())
            .thread_name(|i| format!("cvscan-worker-{}", i))
            .build()?;

        Ok(Self {
            cache,
            extractor: Arc::new(PlainTextExtractor),
            pool,
            config,
        })
    }

    /// Replace the text extractor used by `initialize`
    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn cache(&self) -> Arc<RwLock<DocumentCache>> {
        Arc::clone(&self.cache)
    }

    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Corpus
    // ─────────────────────────────────────────────────────────────────────────────

    /// Load `<root>/<category>/<file>` into the cache, replacing whatever was there.
    pub fn initialize(&self, root: &Path) -> ScanResult<CorpusStats> {
        let (fresh, stats) = DocumentCache::load(root, self.extractor.as_ref(), &self.config, &self.pool)?;
        *self.cache.write() = fresh;
        Ok(stats)
    }

    /// Cached document ids in ascending order
    pub fn document_ids(&self) -> Vec<DocumentId> {
        self.cache.read().ids().cloned().collect()
    }

    pub fn document_text(&self, id: &DocumentId) -> Option<String> {
        self.cache.read().get(id).map(|doc| doc.text().to_string())
    }

    /// Skills, jobs and education parsed from a cached document
    pub fn summary(&self, id: &DocumentId) -> Option<CvSummary> {
        self.cache.read().get(id).map(|doc| extract_summary(doc.text()))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────────

    /// Rank documents by total exact occurrences of `keywords`.
    ///
    /// KMP and Boyer-Moore scan each document once per keyword. Aho-Corasick
    /// scans once for the whole set, so it pulls ahead as the keyword count grows.
    pub fn search_exact<S: AsRef<str>>(
        &self,
        keywords: &[S],
        algorithm: Algorithm,
        limit: usize,
    ) -> ScanResult<SearchReport> {
        check_limit(limit)?;
        let started = Instant::now();
        let case_sensitive = self.config.case_sensitive;
        let keywords = search::normalize_keywords(keywords, case_sensitive);

        let cache = self.cache.read();
        if !cache.is_ready() {
            return Err(ScanError::NotInitialized);
        }

        let matcher = CompiledMatcher::compile(algorithm, &keywords);
        tracing::debug!(
            "Compiled {} keywords for {} ({} text passes per document)",
            matcher.keyword_count(),
            algorithm,
            matcher.passes_per_text(),
        );
        #[cfg(feature = "perf-log")]
        let compiled_at = Instant::now();

        let outcome = search::run_matcher(&self.pool, cache.documents(), &matcher, case_sensitive);
        drop(cache);

        #[cfg(feature = "perf-log")]
        tracing::info!(
            "[perf] compile={:.2}ms match={:.2}ms",
            (compiled_at - started).as_secs_f64() * 1000.0,
            compiled_at.elapsed().as_secs_f64() * 1000.0,
        );

        let report = search::into_report(outcome, limit, SearchEngineKind::Exact { algorithm }, started);
        log_report(&report);
        Ok(report)
    }

    /// `search_exact` with the algorithm given by name: "KMP", "BM" or "AC"
    pub fn search_exact_named<S: AsRef<str>>(
        &self,
        keywords: &[S],
        algorithm: &str,
        limit: usize,
    ) -> ScanResult<SearchReport> {
        let algorithm: Algorithm = algorithm.parse()?;
        self.search_exact(keywords, algorithm, limit)
    }

    /// Rank documents by the number of (keyword, word) pairs within `max_distance` edits.
    /// A separate entry point; it is never mixed into exact-match ranking.
    pub fn search_fuzzy<S: AsRef<str>>(
        &self,
        keywords: &[S],
        max_distance: usize,
        limit: usize,
    ) -> ScanResult<SearchReport> {
        check_limit(limit)?;
        let started = Instant::now();
        let case_sensitive = self.config.case_sensitive;
        let keywords = search::normalize_keywords(keywords, case_sensitive);

        let cache = self.cache.read();
        if !cache.is_ready() {
            return Err(ScanError::NotInitialized);
        }

        let matcher = FuzzyMatcher::new(&keywords, max_distance);
        let outcome = search::run_matcher(&self.pool, cache.documents(), &matcher, case_sensitive);
        drop(cache);

        let report = search::into_report(outcome, limit, SearchEngineKind::Fuzzy { max_distance }, started);
        log_report(&report);
        Ok(report)
    }
}

fn check_limit(limit: usize) -> ScanResult<()> {
    if limit == 0 {
        return Err(ScanError::InvalidInput("limit must be at least 1".to_string()));
    }
    Ok(())
}

fn log_report(report: &SearchReport) {
    tracing::info!(
        "{} search: {} hits from {} documents ({} failed) in {:?}",
        report.engine,
        report.matches.len(),
        report.documents_scanned,
        report.failed_documents,
        report.elapsed,
    );
}
