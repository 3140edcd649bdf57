#![allow(dead_code)]

pub mod command;

use std::path::Path;

/// Parse the on-disk history file of a repository
pub fn read_versions_json(dir: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(dir.join(".jot").join("versions.json"))
        .expect("Failed to read versions file");
    serde_json::from_str(&content).expect("Failed to parse versions file")
}

/// Read the stored current text of a repository
pub fn read_current_text(dir: &Path) -> String {
    let content = std::fs::read_to_string(dir.join(".jot").join("current-text.json"))
        .expect("Failed to read current text file");
    let value: serde_json::Value =
        serde_json::from_str(&content).expect("Failed to parse current text file");
    value["text"]
        .as_str()
        .expect("current text is not a string")
        .to_string()
}
