//! Aho-Corasick multi-pattern matcher.
//!
//! The trie lives in a flat arena; child and failure links are indices into it,
//! so the cyclic failure graph needs no shared ownership.

use super::Matcher;
use std::collections::VecDeque;

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    /// Sorted by byte for binary search
    children: Vec<(u8, usize)>,
    /// Longest proper suffix of this node's path that is also a trie path
    fail: usize,
    /// Keywords ending here or anywhere along the failure chain.
    /// Duplicate keywords count once each, matching per-keyword summation.
    output: usize,
}

impl Node {
    fn child(&self, b: u8) -> Option<usize> {
        self.children
            .binary_search_by_key(&b, |&(k, _)| k)
            .ok()
            .map(|i| self.children[i].1)
    }
}

/// Automaton over a whole keyword set; one text pass counts every keyword.
#[derive(Debug, Clone)]
pub struct AhoCorasick {
    nodes: Vec<Node>,
    keywords: usize,
}

impl AhoCorasick {
    /// Build the trie, then failure links and outputs breadth-first.
    /// Empty keywords are skipped.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        let mut automaton = Self {
            nodes: vec![Node::default()],
            keywords: 0,
        };
        for keyword in keywords {
            automaton.insert(keyword.as_ref().as_bytes());
        }
        automaton.build_failure_links();
        automaton
    }

    /// Number of non-empty keywords compiled in
    pub fn keyword_count(&self) -> usize {
        self.keywords
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn insert(&mut self, keyword: &[u8]) {
        if keyword.is_empty() {
            return;
        }
        let mut node = ROOT;
        for &b in keyword {
            node = match self.nodes[node].children.binary_search_by_key(&b, |&(k, _)| k) {
                Ok(i) => self.nodes[node].children[i].1,
                Err(i) => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(i, (b, next));
                    next
                }
            };
        }
        self.nodes[node].output += 1;
        self.keywords += 1;
    }

    fn build_failure_links(&mut self) {
        let mut queue = VecDeque::from([ROOT]);
        while let Some(parent) = queue.pop_front() {
            let children = self.nodes[parent].children.clone();
            for (b, child) in children {
                let fail = if parent == ROOT {
                    ROOT
                } else {
                    self.next_state(self.nodes[parent].fail, b)
                };
                self.nodes[child].fail = fail;
                // `fail` is shallower, so its output is already final
                self.nodes[child].output += self.nodes[fail].output;
                queue.push_back(child);
            }
        }
    }

    /// Follow failure links from `state` until a `b` transition exists or the root is reached.
    fn next_state(&self, mut state: usize, b: u8) -> usize {
        loop {
            if let Some(next) = self.nodes[state].child(b) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.nodes[state].fail;
        }
    }

    /// Total occurrences of all keywords in `text`, overlaps included.
    pub fn count_in(&self, text: &str) -> usize {
        if self.keywords == 0 {
            return 0;
        }
        let mut state = ROOT;
        let mut count = 0usize;
        for &b in text.as_bytes() {
            state = self.next_state(state, b);
            count += self.nodes[state].output;
        }
        count
    }
}

impl Matcher for AhoCorasick {
    fn count(&self, text: &str) -> usize {
        self.count_in(text)
    }
}
