//! Stopword filtering.

use crate::stopwords::StopwordSet;

/// Remove stopwords from text, preserving token order and casing.
///
/// Tokens are whitespace-delimited; punctuation attached to a token is not
/// stripped, so `"end."` and `"end"` are distinct tokens and only the bare
/// form can match a stopword entry. A token is dropped iff its lowercase
/// form is in `stopwords`; retained tokens keep their original casing and
/// relative order, joined with single spaces.
///
/// The operation is deterministic and idempotent: filtering already
/// filtered text changes nothing.
pub fn filter_stopwords(text: &str, stopwords: &StopwordSet) -> String {
    text.split_whitespace()
        .filter(|token| !stopwords.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}
