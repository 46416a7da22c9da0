//! Stopword sets for frequency analysis.
//!
//! The built-in English set is constructed once per process and shared
//! read-only; custom sets can be built for other languages or for tests.

use std::collections::HashSet;
use std::sync::Arc;

/// Common English stopwords, matching the usual word-cloud defaults.
const ENGLISH_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and",
    "any", "are", "aren't", "as", "at", "be", "because", "been", "before", "being",
    "below", "between", "both", "but", "by", "can't", "cannot", "could", "couldn't",
    "did", "didn't", "do", "does", "doesn't", "doing", "don't", "down", "during",
    "each", "few", "for", "from", "further", "had", "hadn't", "has", "hasn't",
    "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i",
    "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's",
    "its", "itself", "let's", "me", "more", "most", "mustn't", "my", "myself",
    "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other", "ought",
    "our", "ours", "ourselves", "out", "over", "own", "same", "shan't", "she",
    "she'd", "she'll", "she's", "should", "shouldn't", "so", "some", "such",
    "than", "that", "that's", "the", "their", "theirs", "them", "themselves",
    "then", "there", "there's", "these", "they", "they'd", "they'll", "they're",
    "they've", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were",
    "weren't", "what", "what's", "when", "when's", "where", "where's", "which",
    "while", "who", "who's", "whom", "why", "why's", "with", "won't", "would",
    "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

lazy_static::lazy_static! {
    static ref ENGLISH: Arc<StopwordSet> = Arc::new(StopwordSet::new(ENGLISH_WORDS.iter().copied()));
}

/// An immutable, case-insensitive set of stopwords.
///
/// Membership is tested against the lowercase form of a token, so entries
/// are normalized to lowercase at construction and the set is never
/// mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from an iterator of words. Entries are lowercased.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// An empty set (filtering with it is the identity).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shared built-in English set, constructed on first use.
    pub fn english() -> Arc<StopwordSet> {
        Arc::clone(&ENGLISH)
    }

    /// Return a new set containing this set's words plus `extra`.
    pub fn with_extra<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = self.words.clone();
        words.extend(extra.into_iter().map(|w| w.as_ref().to_lowercase()));
        Self { words }
    }

    /// Test whether a token's lowercase form is a stopword.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }

    /// Number of distinct stopwords in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_contains_common_words() {
        let set = StopwordSet::english();
        assert!(set.contains("the"));
        assert!(set.contains("The"));
        assert!(set.contains("AND"));
        assert!(!set.contains("rust"));
    }

    #[test]
    fn test_english_is_shared() {
        let a = StopwordSet::english();
        let b = StopwordSet::english();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_custom_set_lowercases_entries() {
        let set = StopwordSet::new(["The", "ON"]);
        assert!(set.contains("the"));
        assert!(set.contains("On"));
        assert!(!set.contains("cat"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_punctuated_token_is_not_a_member() {
        // Membership is exact on the lowercased token; "the." is distinct.
        let set = StopwordSet::new(["the"]);
        assert!(!set.contains("the."));
    }

    #[test]
    fn test_with_extra() {
        let base = StopwordSet::new(["the"]);
        let extended = base.with_extra(["Cat"]);
        assert!(extended.contains("cat"));
        assert!(base.contains("the"));
        assert!(!base.contains("cat"));
    }

    #[test]
    fn test_empty_set() {
        let set = StopwordSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains("the"));
    }
}
