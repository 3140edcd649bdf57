//! Version history entries
//!
//! A version entry records one saved snapshot: a generated identifier, the
//! save timestamp, and the word-level delta against the previous snapshot.
//!
//! ## Format
//!
//! Serialized to JSON as:
//!
//! ```text
//! {
//!   "id": "<uuid-v4>",
//!   "timestamp": "YYYY-MM-DD HH:MM",
//!   "addedWords": [...],
//!   "removedWords": [...],
//!   "oldLength": <chars>,
//!   "newLength": <chars>
//! }
//! ```

use crate::artifacts::diff::word_diff::TextDiff;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display format for version timestamps, local time
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Number of id characters shown in abbreviated output
const SHORT_ID_LEN: usize = 8;

/// One saved snapshot of the tracked text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    id: Uuid,
    timestamp: String,
    #[serde(flatten)]
    diff: TextDiff,
}

impl VersionEntry {
    /// Create an entry for a freshly computed diff, stamped with a new id and
    /// the current local time
    pub fn new(diff: TextDiff) -> Self {
        VersionEntry {
            id: Uuid::new_v4(),
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            diff,
        }
    }

    pub fn id(&self) -> String {
        self.id.to_string()
    }

    /// Abbreviated id for one-line output
    pub fn short_id(&self) -> String {
        self.id.to_string().chars().take(SHORT_ID_LEN).collect()
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn diff(&self) -> &TextDiff {
        &self.diff
    }

    /// True when `prefix` matches the start of this entry's hyphenated id
    pub fn matches_id_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.id.to_string().starts_with(prefix)
    }
}
