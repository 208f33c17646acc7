//! Cached document.
//!
//! `text` is private and never changes after `new`, which keeps the memoized
//! lowercase copy valid for the document's lifetime.

use crate::interface::DocumentId;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// A document held by the `DocumentCache`.
/// `text_lower()` is computed on first access and cached, so case-insensitive
/// searches lowercase each document once per process instead of once per search.
#[derive(Debug)]
pub struct Document {
    id: DocumentId,
    path: PathBuf,
    text: String,
    text_lower: OnceLock<String>,
}

impl Document {
    pub fn new(id: DocumentId, path: PathBuf, text: String) -> Self {
        Self {
            id,
            path,
            text,
            text_lower: OnceLock::new(),
        }
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn category(&self) -> &str {
        self.id.category()
    }

    /// Filesystem location the text was extracted from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full raw extraction output
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_lower(&self) -> &str {
        self.text_lower.get_or_init(|| self.text.to_lowercase())
    }

    /// Text to run matchers against for the given case mode
    pub fn searchable_text(&self, case_sensitive: bool) -> &str {
        if case_sensitive {
            self.text()
        } else {
            self.text_lower()
        }
    }
}
