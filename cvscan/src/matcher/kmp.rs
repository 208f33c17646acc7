//! Knuth-Morris-Pratt single-pattern matcher.
//!
//! Works on UTF-8 bytes. A valid UTF-8 pattern can only match a valid UTF-8
//! text at character boundaries, so byte counts equal character counts.

use super::Matcher;

/// One compiled keyword: the pattern and its failure function.
#[derive(Debug, Clone)]
pub struct Kmp {
    pattern: Vec<u8>,
    /// `failure[i]` = length of the longest proper prefix of `pattern[..=i]`
    /// that is also a suffix of it
    failure: Vec<usize>,
}

impl Kmp {
    pub fn new(pattern: &str) -> Self {
        let pattern = pattern.as_bytes().to_vec();
        let failure = failure_function(&pattern);
        Self { pattern, failure }
    }

    /// Count overlapping occurrences of the pattern in `text`.
    pub fn count_in(&self, text: &str) -> usize {
        let pattern = &self.pattern;
        let text = text.as_bytes();
        if pattern.is_empty() || pattern.len() > text.len() {
            return 0;
        }

        let mut matched = 0usize;
        let mut count = 0usize;
        for &b in text {
            while matched > 0 && pattern[matched] != b {
                matched = self.failure[matched - 1];
            }
            if pattern[matched] == b {
                matched += 1;
            }
            if matched == pattern.len() {
                count += 1;
                // Continue from the border so overlapping matches are found
                matched = self.failure[matched - 1];
            }
        }
        count
    }
}

impl Matcher for Kmp {
    fn count(&self, text: &str) -> usize {
        self.count_in(text)
    }
}

/// Border array in O(m).
pub(crate) fn failure_function(pattern: &[u8]) -> Vec<usize> {
    let mut failure = vec![0usize; pattern.len()];
    let mut k = 0usize;
    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = failure[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        failure[i] = k;
    }
    failure
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_function() {
        assert_eq!(failure_function(b"ababaca"), vec![0, 0, 1, 2, 3, 0, 1]);
        assert_eq!(failure_function(b"aaaa"), vec![0, 1, 2, 3]);
        assert_eq!(failure_function(b"abcd"), vec![0, 0, 0, 0]);
        assert!(failure_function(b"").is_empty());
    }

    #[test]
    fn test_count_overlapping() {
        assert_eq!(Kmp::new("aa").count_in("aaa"), 2);
        assert_eq!(Kmp::new("aaa").count_in("aaaa"), 2);
        assert_eq!(Kmp::new("aba").count_in("ababababa"), 4);
    }

    #[test]
    fn test_count_no_restart_after_partial_match() {
        // "abab" partially matches before the real occurrence starts
        assert_eq!(Kmp::new("ababc").count_in("abababc"), 1);
    }

    #[test]
    fn test_count_degenerate() {
        assert_eq!(Kmp::new("").count_in("anything"), 0);
        assert_eq!(Kmp::new("longer than text").count_in("short"), 0);
        assert_eq!(Kmp::new("java").count_in(""), 0);
        assert_eq!(Kmp::new("exact").count_in("exact"), 1);
    }

    #[test]
    fn test_count_multibyte() {
        assert_eq!(Kmp::new("日本").count_in("日本語と日本"), 2);
        assert_eq!(Kmp::new("é").count_in("café résumé"), 3);
    }
}
