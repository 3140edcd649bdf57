use crate::artifacts::diff::multiset::WordMultiset;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Lowercase a text and split it into whitespace-delimited tokens
///
/// Splitting happens on runs of Unicode whitespace, so leading, trailing, and
/// repeated whitespace never produce empty tokens. Punctuation stays attached
/// to its word: `end` and `end.` are distinct tokens. An empty or
/// whitespace-only input yields an empty sequence.
pub fn normalize_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Word-level delta between two text versions
///
/// `added_words` holds every word whose occurrence count grew from the old
/// text to the new one, repeated once per unit of increase, in the new text's
/// first-occurrence order. `removed_words` is the mirror image for shrinking
/// counts, in the old text's first-occurrence order. A word never appears in
/// both lists.
///
/// `old_length` and `new_length` count Unicode scalar values of the raw
/// (non-normalized) inputs, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDiff {
    pub added_words: Vec<String>,
    pub removed_words: Vec<String>,
    pub old_length: usize,
    pub new_length: usize,
}

impl TextDiff {
    /// True when no word count changed between the two versions
    pub fn is_unchanged(&self) -> bool {
        self.added_words.is_empty() && self.removed_words.is_empty()
    }
}

/// Bag-of-words comparison of two texts
///
/// This is a multiset diff, not a sequence diff: word positions are ignored,
/// so reordering words is invisible, and only per-word occurrence counts are
/// compared. Total over all string inputs, including non-ASCII text.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct WordDiff<'d> {
    old: &'d str,
    new: &'d str,
}

impl WordDiff<'_> {
    pub fn diff(&self) -> TextDiff {
        let old_counts = WordMultiset::from_words(normalize_words(self.old));
        let new_counts = WordMultiset::from_words(normalize_words(self.new));

        TextDiff {
            added_words: new_counts.surplus(&old_counts),
            removed_words: old_counts.surplus(&new_counts),
            old_length: self.old.chars().count(),
            new_length: self.new.chars().count(),
        }
    }
}
