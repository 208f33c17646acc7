//! Boyer-Moore single-pattern matcher with bad-character and good-suffix shifts.

use super::Matcher;

const ALPHABET: usize = 256;

/// One compiled keyword with both shift tables.
#[derive(Debug, Clone)]
pub struct BoyerMoore {
    pattern: Vec<u8>,
    /// Last index of each byte in the pattern, -1 when absent
    bad_char: [isize; ALPHABET],
    /// `good_suffix[j]` = shift when the mismatch happens just before `pattern[j..]`.
    /// `good_suffix[0]` is the shift after a full match (the pattern's period).
    good_suffix: Vec<usize>,
}

impl BoyerMoore {
    pub fn new(pattern: &str) -> Self {
        let pattern = pattern.as_bytes().to_vec();
        let bad_char = bad_character_table(&pattern);
        let good_suffix = good_suffix_table(&pattern);
        Self {
            pattern,
            bad_char,
            good_suffix,
        }
    }

    /// Count overlapping occurrences of the pattern in `text`.
    pub fn count_in(&self, text: &str) -> usize {
        let pattern = &self.pattern;
        let text = text.as_bytes();
        let m = pattern.len();
        let n = text.len();
        if m == 0 || m > n {
            return 0;
        }

        let mut count = 0usize;
        let mut shift = 0usize;
        while shift <= n - m {
            // `j` counts the unmatched prefix; compare right to left
            let mut j = m;
            while j > 0 && pattern[j - 1] == text[shift + j - 1] {
                j -= 1;
            }

            if j == 0 {
                count += 1;
                shift += self.good_suffix[0].max(1);
            } else {
                let mismatch = j - 1;
                let bc_shift = mismatch as isize - self.bad_char[text[shift + mismatch] as usize];
                let gs_shift = self.good_suffix[mismatch + 1] as isize;
                shift += bc_shift.max(gs_shift).max(1) as usize;
            }
        }
        count
    }
}

impl Matcher for BoyerMoore {
    fn count(&self, text: &str) -> usize {
        self.count_in(text)
    }
}

fn bad_character_table(pattern: &[u8]) -> [isize; ALPHABET] {
    let mut table = [-1isize; ALPHABET];
    for (i, &b) in pattern.iter().enumerate() {
        table[b as usize] = i as isize;
    }
    table
}

/// Strong good-suffix table from the border-array construction.
/// Returns `m + 1` entries.
fn good_suffix_table(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut shift = vec![0usize; m + 1];
    // border[i] = start of the widest border of pattern[i..]
    let mut border = vec![0usize; m + 1];

    let mut i = m;
    let mut j = m + 1;
    border[i] = j;
    while i > 0 {
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shift[j] == 0 {
                shift[j] = j - i;
            }
            j = border[j];
        }
        i -= 1;
        j -= 1;
        border[i] = j;
    }

    // Suffixes with no re-occurrence fall back to the widest border of the whole pattern
    let mut j = border[0];
    for (i, s) in shift.iter_mut().enumerate() {
        if *s == 0 {
            *s = j;
        }
        if i == j {
            j = border[j];
        }
    }
    shift
}
