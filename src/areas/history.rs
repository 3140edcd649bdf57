//! Version history storage
//!
//! The history is an append-only sequence of version entries, one per saved
//! snapshot. Entries are kept in insertion order; callers that want
//! newest-first output reverse the sequence themselves.
//!
//! ## File Format
//!
//! The file backend stores a pretty-printed JSON array of entries. A missing
//! file reads as an empty history, so a fresh repository needs no setup
//! beyond the data directory.

use crate::artifacts::version::VersionEntry;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::{Read, Seek, SeekFrom, Write};
use std::ops::DerefMut;
use std::path::Path;

/// Storage backend for the version history
///
/// Implementations are chosen once at process start; command logic never
/// branches on the backend.
pub trait HistoryStore: Send {
    /// All recorded entries, oldest first
    fn versions(&self) -> anyhow::Result<Vec<VersionEntry>>;

    /// Record a new entry after the existing ones
    fn append(&mut self, entry: VersionEntry) -> anyhow::Result<()>;
}

/// History backed by a JSON file on disk
///
/// Reads take a shared lock and writes an exclusive lock on the file, so
/// concurrent invocations cannot interleave the read-modify-write cycle of
/// an append.
#[derive(Debug, new)]
pub struct JsonFileHistory {
    path: Box<Path>,
}

impl HistoryStore for JsonFileHistory {
    fn versions(&self) -> anyhow::Result<Vec<VersionEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut history_file = std::fs::OpenOptions::new()
            .read(true)
            .open(&self.path)
            .with_context(|| format!("failed to open history file at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut history_file, Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut().read_to_string(&mut content)?;

        parse_versions(&content)
            .with_context(|| format!("malformed history file at {:?}", self.path))
    }

    fn append(&mut self, entry: VersionEntry) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create data directory at {:?}", parent)
            })?;
        }

        let mut history_file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .with_context(|| format!("failed to open history file at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut history_file, Lock::Exclusive, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut().read_to_string(&mut content)?;
        let mut versions = parse_versions(&content)
            .with_context(|| format!("malformed history file at {:?}", self.path))?;

        versions.push(entry);

        let serialized = serde_json::to_string_pretty(&versions)?;
        let history_file = lock.deref_mut();
        history_file.seek(SeekFrom::Start(0))?;
        history_file.set_len(0)?;
        history_file.write_all(serialized.as_bytes())?;

        Ok(())
    }
}

fn parse_versions(content: &str) -> anyhow::Result<Vec<VersionEntry>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(content)?)
}

/// History kept in process memory, for ephemeral runs and tests
#[derive(Debug, Default, new)]
pub struct InMemoryHistory {
    #[new(default)]
    entries: Vec<VersionEntry>,
}

impl HistoryStore for InMemoryHistory {
    fn versions(&self) -> anyhow::Result<Vec<VersionEntry>> {
        Ok(self.entries.clone())
    }

    fn append(&mut self, entry: VersionEntry) -> anyhow::Result<()> {
        self.entries.push(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{HistoryStore, InMemoryHistory, JsonFileHistory};
    use crate::artifacts::diff::word_diff::WordDiff;
    use crate::artifacts::version::VersionEntry;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn entry(old: &str, new: &str) -> VersionEntry {
        VersionEntry::new(WordDiff::new(old, new).diff())
    }

    #[rstest]
    fn missing_file_reads_as_empty_history() {
        let dir = assert_fs::TempDir::new().expect("temp dir");
        let store = JsonFileHistory::new(dir.path().join("versions.json").into_boxed_path());

        assert_eq!(store.versions().expect("versions read"), vec![]);
    }

    #[rstest]
    fn appended_entries_come_back_in_insertion_order() {
        let dir = assert_fs::TempDir::new().expect("temp dir");
        let mut store = JsonFileHistory::new(dir.path().join("versions.json").into_boxed_path());

        let first = entry("", "one");
        let second = entry("one", "one two");
        store.append(first.clone()).expect("first append");
        store.append(second.clone()).expect("second append");

        assert_eq!(store.versions().expect("versions read"), vec![first, second]);
    }

    #[rstest]
    fn file_store_writes_a_pretty_printed_json_array() {
        let dir = assert_fs::TempDir::new().expect("temp dir");
        let path = dir.path().join("versions.json");
        let mut store = JsonFileHistory::new(path.clone().into_boxed_path());

        store.append(entry("", "hello")).expect("append");

        let content = std::fs::read_to_string(&path).expect("history file");
        assert!(content.starts_with("[\n"));
        assert!(content.contains("\"addedWords\""));
    }

    #[rstest]
    fn corrupt_file_reports_an_error_with_the_path() {
        let dir = assert_fs::TempDir::new().expect("temp dir");
        let path = dir.path().join("versions.json");
        std::fs::write(&path, "{not json").expect("write corrupt file");
        let store = JsonFileHistory::new(path.into_boxed_path());

        let error = store.versions().expect_err("corrupt file rejected");
        assert!(error.to_string().contains("malformed history file"));
    }

    #[rstest]
    fn in_memory_store_round_trips_entries() {
        let mut store = InMemoryHistory::new();

        let recorded = entry("", "word");
        store.append(recorded.clone()).expect("append");

        assert_eq!(store.versions().expect("versions read"), vec![recorded]);
    }
}
