//! Current text storage
//!
//! The workspace holds the most recently saved text, which becomes the old
//! side of the next diff. Missing state reads as the empty string, so the
//! first save diffs against nothing.
//!
//! ## File Format
//!
//! The file backend stores `{"text": "..."}`, pretty-printed.

use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;

/// Storage backend for the current text
pub trait WorkspaceStore: Send {
    /// The text saved by the previous snapshot, empty if none exists yet
    fn current_text(&self) -> anyhow::Result<String>;

    /// Replace the stored text with the newly saved snapshot
    fn save_text(&mut self, text: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct CurrentText {
    text: String,
}

/// Current text backed by a JSON file on disk
#[derive(Debug, new)]
pub struct JsonFileWorkspace {
    path: Box<Path>,
}

impl WorkspaceStore for JsonFileWorkspace {
    fn current_text(&self) -> anyhow::Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read current text file at {:?}", self.path))?;
        if content.trim().is_empty() {
            return Ok(String::new());
        }

        let current: CurrentText = serde_json::from_str(&content)
            .with_context(|| format!("malformed current text file at {:?}", self.path))?;

        Ok(current.text)
    }

    fn save_text(&mut self, text: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create data directory at {:?}", parent)
            })?;
        }

        let serialized = serde_json::to_string_pretty(&CurrentText {
            text: text.to_string(),
        })?;

        let mut text_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .with_context(|| format!("failed to open current text file at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut text_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(serialized.as_bytes())?;

        Ok(())
    }
}

/// Current text kept in process memory, for ephemeral runs and tests
#[derive(Debug, Default, new)]
pub struct InMemoryWorkspace {
    #[new(default)]
    text: String,
}

impl WorkspaceStore for InMemoryWorkspace {
    fn current_text(&self) -> anyhow::Result<String> {
        Ok(self.text.clone())
    }

    fn save_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.text = text.to_string();
        Ok(())
    }
}
