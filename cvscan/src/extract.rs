//! Text extraction collaborator
//!
//! The cache asks an extractor for each document's raw text. Any error marks
//! that document unusable; it never aborts the corpus load.

use std::path::Path;
use thiserror::Error;

/// Error type for per-document extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Document is not valid UTF-8 text")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

pub type ExtractResult<T> = Result<T, ExtractError>;

/// Produces the plain text of one document.
/// Called concurrently from the worker pool.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, path: &Path) -> ExtractResult<String>;
}

/// Reads documents that are already plain UTF-8 text.
/// PDF and office formats need their own extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, path: &Path) -> ExtractResult<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8(bytes)?)
    }
}

impl<F> TextExtractor for F
where
    F: Fn(&Path) -> ExtractResult<String> + Send + Sync,
{
    fn extract_text(&self, path: &Path) -> ExtractResult<String> {
        self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_extractor_reads_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.txt");
        std::fs::write(&path, "Skills: Rust, SQL").unwrap();
        assert_eq!(PlainTextExtractor.extract_text(&path).unwrap(), "Skills: Rust, SQL");
    }

    #[test]
    fn test_plain_text_extractor_rejects_binary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.pdf");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x9f]).unwrap();
        assert!(matches!(PlainTextExtractor.extract_text(&path), Err(ExtractError::InvalidUtf8(_))));
    }

    #[test]
    fn test_plain_text_extractor_missing_file() {
        let err = PlainTextExtractor.extract_text(Path::new("/nonexistent/cv.txt")).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }

    #[test]
    fn test_closure_extractor() {
        let upper = |path: &Path| -> ExtractResult<String> {
            Ok(path.file_name().unwrap().to_string_lossy().to_uppercase())
        };
        assert_eq!(upper.extract_text(Path::new("a/b.txt")).unwrap(), "B.TXT");
    }
}
