//! Scanner configuration
//!
//! Loaded from a JSON file; every field has a default so a partial file (or no
//! file at all) is valid.

use crate::interface::{ScanError, ScanResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of ranked documents returned
pub const DEFAULT_LIMIT: usize = 10;

/// Default edit-distance threshold for fuzzy search
pub const DEFAULT_MAX_DISTANCE: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Worker pool size. `None` uses every available core.
    pub worker_threads: Option<usize>,
    /// When false, keywords and document texts are lowercased before matching
    pub case_sensitive: bool,
    /// File extensions (without the dot) to load; empty loads every file
    pub extensions: Vec<String>,
    pub default_limit: usize,
    pub default_max_distance: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            worker_threads: None,
            case_sensitive: true,
            extensions: Vec::new(),
            default_limit: DEFAULT_LIMIT,
            default_max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl ScanConfig {
    /// Load from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> ScanResult<Self> {
        if !path.exists() {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config: ScanConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ScanResult<()> {
        if self.worker_threads == Some(0) {
            return Err(ScanError::Config("worker_threads must be at least 1".to_string()));
        }
        if self.default_limit == 0 {
            return Err(ScanError::Config("default_limit must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Resolved pool size
    pub fn worker_count(&self) -> usize {
        self.worker_threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        })
    }

    /// Whether a file with this name passes the extension filter
    pub fn accepts_file(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
    }
}
