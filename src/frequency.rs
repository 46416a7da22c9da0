//! Word-frequency counting.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A distinct word and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The word, case-sensitive as it appeared in the input.
    pub word: String,
    /// Number of occurrences (always >= 1).
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Count whitespace-delimited tokens, case-sensitive, with a deterministic
/// ordering: descending count, ties broken by first appearance in the input.
///
/// Empty input yields an empty list.
pub fn count_words(text: &str) -> Vec<WordCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<WordCount> = Vec::new();

    // Build in first-appearance order; the stable sort below then keeps
    // that order among equal counts.
    for token in text.split_whitespace() {
        match index.get(token) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(token, counts.len());
                counts.push(WordCount::new(token, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
