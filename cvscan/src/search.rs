//! Search fan-out and ranking
//!
//! A compiled matcher is applied to every cached document on the worker pool.
//! Each document is an isolated unit: a matcher panic on one text is logged and
//! counted, the rest of the batch completes. Sorting happens after the join.

use crate::interface::{MatchResult, SearchEngineKind, SearchReport};
use crate::matcher::Matcher;
use crate::models::Document;
use rayon::ThreadPool;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

/// Unranked output of one fan-out
#[derive(Debug, Default)]
pub(crate) struct MatchOutcome {
    /// Non-zero hits in document order
    pub(crate) hits: Vec<MatchResult>,
    pub(crate) scanned: usize,
    pub(crate) failed: usize,
}

/// Run `matcher` over `documents` on `pool` and keep the non-zero counts.
pub(crate) fn run_matcher<M>(pool: &ThreadPool, documents: &[Document], matcher: &M, case_sensitive: bool) -> MatchOutcome
where
    M: Matcher + ?Sized,
{
    use rayon::prelude::*;
    let counts: Vec<Option<usize>> = pool.install(|| {
        documents
            .par_iter()
            .map(|doc| count_document(doc, matcher, case_sensitive))
            .collect()
    });

    let mut outcome = MatchOutcome {
        scanned: documents.len(),
        ..Default::default()
    };
    for (doc, count) in documents.iter().zip(counts) {
        match count {
            Some(0) => {}
            Some(count) => outcome.hits.push(MatchResult {
                document: doc.id().clone(),
                count,
            }),
            None => outcome.failed += 1,
        }
    }
    outcome
}

/// `None` when the matcher panicked on this document
fn count_document<M>(doc: &Document, matcher: &M, case_sensitive: bool) -> Option<usize>
where
    M: Matcher + ?Sized,
{
    panic::catch_unwind(AssertUnwindSafe(|| matcher.count(doc.searchable_text(case_sensitive))))
        .map_err(|payload| {
            tracing::error!("Matcher failed on {}: {}", doc.id(), panic_message(payload.as_ref()));
        })
        .ok()
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

/// Sort descending by count, ties by ascending document id, then truncate.
pub(crate) fn rank_matches(mut hits: Vec<MatchResult>, limit: usize) -> Vec<MatchResult> {
    hits.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.document.cmp(&b.document)));
    hits.truncate(limit);
    hits
}

/// Rank an outcome into the report handed back to callers
pub(crate) fn into_report(outcome: MatchOutcome, limit: usize, engine: SearchEngineKind, started: Instant) -> SearchReport {
    SearchReport {
        matches: rank_matches(outcome.hits, limit),
        engine,
        documents_scanned: outcome.scanned,
        failed_documents: outcome.failed,
        elapsed: started.elapsed(),
    }
}

/// Keyword preparation shared by every engine: drop empties, fold case if asked.
/// Keywords are otherwise matched exactly as given, surrounding whitespace included.
pub(crate) fn normalize_keywords<S: AsRef<str>>(keywords: &[S], case_sensitive: bool) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.as_ref())
        .filter(|k| !k.is_empty())
        .map(|k| if case_sensitive { k.to_string() } else { k.to_lowercase() })
        .collect()
}
