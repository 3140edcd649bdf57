//! Word-level text diffing
//!
//! This module implements the snapshot comparison core:
//!
//! - `multiset`: insertion-ordered word occurrence counts
//! - `word_diff`: normalization and the bag-of-words delta between two texts
//!
//! The comparison is deliberately a multiset diff: it reports per-word count
//! changes and ignores word positions, so it is cheaper than a sequence diff
//! but cannot see reorderings.

pub mod multiset;
pub mod word_diff;
