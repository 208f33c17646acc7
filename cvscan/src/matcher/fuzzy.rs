//! Bounded Levenshtein word matcher.
//!
//! Every (keyword, whitespace token) pair within `max_distance` edits counts
//! as one match. There is no index: cost is keywords x tokens x the DP table,
//! so document-level parallelism in the orchestrator is the only scaling lever.

use super::Matcher;

/// Fuzzy matcher over a keyword set. Keywords are pre-split into chars once.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    keywords: Vec<Vec<char>>,
    max_distance: usize,
}

impl FuzzyMatcher {
    /// Empty keywords are skipped.
    pub fn new<S: AsRef<str>>(keywords: &[S], max_distance: usize) -> Self {
        let keywords = keywords
            .iter()
            .map(|k| k.as_ref())
            .filter(|k| !k.is_empty())
            .map(|k| k.chars().collect())
            .collect();
        Self {
            keywords,
            max_distance,
        }
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Number of (keyword, token) pairs in `text` within the distance threshold.
    pub fn count_in(&self, text: &str) -> usize {
        if self.keywords.is_empty() {
            return 0;
        }
        let tokens: Vec<Vec<char>> = text.split_whitespace().map(|t| t.chars().collect()).collect();

        self.keywords
            .iter()
            .map(|keyword| {
                tokens
                    .iter()
                    .filter(|token| edit_distance_bounded(keyword, token, self.max_distance).is_some())
                    .count()
            })
            .sum()
    }
}

impl Matcher for FuzzyMatcher {
    fn count(&self, text: &str) -> usize {
        self.count_in(text)
    }
}

/// Unbounded Levenshtein distance between two strings.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    edit_distance_bounded(&a_chars, &b_chars, usize::MAX).unwrap_or(usize::MAX)
}

/// Levenshtein edit distance with threshold pruning.
/// Insertions, deletions and substitutions each cost 1.
/// Returns `Some(distance)` if distance <= max_dist, `None` otherwise.
/// Uses two rolling rows sized by the shorter input.
pub fn edit_distance_bounded(a: &[char], b: &[char], max_dist: usize) -> Option<usize> {
    // Columns follow the shorter string
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let m = long.len();
    let n = short.len();

    if m - n > max_dist {
        return None;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        let mut row_min = curr[0];

        for j in 1..=n {
            let cost = if long[i - 1] == short[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
            row_min = row_min.min(curr[j]);
        }

        if row_min > max_dist {
            return None;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    let result = prev[n];
    if result <= max_dist {
        Some(result)
    } else {
        None
    }
}
