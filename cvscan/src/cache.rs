//! Document cache
//!
//! Holds the extracted text of every corpus document. Built in one parallel
//! pass over `<root>/<category>/<file>` and read-only afterwards; searches
//! borrow it immutably, so workers share it without locking.

use crate::config::ScanConfig;
use crate::extract::TextExtractor;
use crate::interface::{CorpusStats, DocumentId, ScanError, ScanResult};
use crate::models::Document;
use rayon::ThreadPool;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Documents sorted by id. Failed extractions are absent, never empty placeholders.
#[derive(Debug, Default)]
pub struct DocumentCache {
    documents: Vec<Document>,
    initialized: bool,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an initialized cache from in-memory `(id, text)` pairs.
    /// A repeated id keeps the last text.
    pub fn from_texts<I, K, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<DocumentId>,
        T: Into<String>,
    {
        let by_id: BTreeMap<DocumentId, String> = texts
            .into_iter()
            .map(|(id, text)| (id.into(), text.into()))
            .collect();
        let documents = by_id
            .into_iter()
            .map(|(id, text)| {
                let path = PathBuf::from(id.as_str());
                Document::new(id, path, text)
            })
            .collect();
        Self {
            documents,
            initialized: true,
        }
    }

    /// Enumerate and extract a corpus on `pool`, returning a fresh cache.
    ///
    /// Only an unreadable root is an error. Unreadable category directories and
    /// documents the extractor rejects (or panics on) are logged and skipped.
    pub fn load(
        root: &Path,
        extractor: &dyn TextExtractor,
        config: &ScanConfig,
        pool: &ThreadPool,
    ) -> ScanResult<(Self, CorpusStats)> {
        let started = Instant::now();
        let (entries, categories) = enumerate_corpus(root, config)?;
        let total = entries.len();

        use rayon::prelude::*;
        // Indexed collect keeps the id order from enumeration
        let extracted: Vec<Option<Document>> = pool.install(|| {
            entries
                .into_par_iter()
                .map(|(id, path)| extract_document(extractor, id, path))
                .collect()
        });
        let documents: Vec<Document> = extracted.into_iter().flatten().collect();

        let stats = CorpusStats {
            loaded: documents.len(),
            failed: total - documents.len(),
            categories,
            elapsed: started.elapsed(),
        };
        tracing::info!(
            "Loaded {} documents from {} categories under {} ({} failed) in {:?}",
            stats.loaded,
            stats.categories,
            root.display(),
            stats.failed,
            stats.elapsed,
        );

        Ok((
            Self {
                documents,
                initialized: true,
            },
            stats,
        ))
    }

    /// Rebuild from scratch. On error the current contents are kept.
    pub fn initialize(
        &mut self,
        root: &Path,
        extractor: &dyn TextExtractor,
        config: &ScanConfig,
        pool: &ThreadPool,
    ) -> ScanResult<CorpusStats> {
        let (fresh, stats) = Self::load(root, extractor, config, pool)?;
        *self = fresh;
        Ok(stats)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Searchable: initialized and holding at least one document
    pub fn is_ready(&self) -> bool {
        self.initialized && !self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: &DocumentId) -> Option<&Document> {
        self.documents
            .binary_search_by(|doc| doc.id().cmp(id))
            .ok()
            .map(|i| &self.documents[i])
    }

    pub fn ids(&self) -> impl Iterator<Item = &DocumentId> {
        self.documents.iter().map(Document::id)
    }

    /// Drop every document and return to the uninitialized state
    pub fn clear(&mut self) {
        self.documents.clear();
        self.initialized = false;
    }
}

fn extract_document(extractor: &dyn TextExtractor, id: DocumentId, path: PathBuf) -> Option<Document> {
    match panic::catch_unwind(AssertUnwindSafe(|| extractor.extract_text(&path))) {
        Ok(Ok(text)) => Some(Document::new(id, path, text)),
        Ok(Err(e)) => {
            tracing::warn!("Skipping {}: {}", path.display(), e);
            None
        }
        Err(_) => {
            tracing::error!("Extractor panicked on {}, skipping", path.display());
            None
        }
    }
}

/// List `<root>/<category>/<file>` entries, sorted by id.
/// Returns the entries and the number of category directories seen.
fn enumerate_corpus(root: &Path, config: &ScanConfig) -> ScanResult<(Vec<(DocumentId, PathBuf)>, usize)> {
    let corpus_root_error = |source| ScanError::CorpusRoot {
        path: root.to_path_buf(),
        source,
    };

    let mut categories = 0usize;
    let mut entries = Vec::new();
    for category in std::fs::read_dir(root).map_err(corpus_root_error)? {
        let category = match category {
            Ok(c) => c.path(),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        // Loose files at the root are not documents
        if !category.is_dir() {
            continue;
        }
        let Some(category_name) = utf8_file_name(&category) else {
            tracing::warn!("Skipping category with non-UTF-8 name: {}", category.display());
            continue;
        };
        categories += 1;

        let files = match std::fs::read_dir(&category) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("Skipping category {}: {}", category.display(), e);
                continue;
            }
        };
        for file in files.flatten() {
            let path = file.path();
            // One level of nesting only
            if !path.is_file() || !config.accepts_file(&path) {
                continue;
            }
            let Some(file_name) = utf8_file_name(&path) else {
                tracing::warn!("Skipping document with non-UTF-8 name: {}", path.display());
                continue;
            };
            let id = DocumentId::new(category_name, file_name);
            entries.push((id, path));
        }
    }

    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok((entries, categories))
}

/// Ids must round-trip exactly, so names that are not valid UTF-8 have no id.
fn utf8_file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}
