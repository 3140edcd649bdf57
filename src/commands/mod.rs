//! Command implementations
//!
//! This module contains all command implementations, organized into two
//! categories in the Git tradition:
//!
//! - `plumbing`: low-level commands operating directly on the diff engine
//!   (word-diff)
//! - `porcelain`: user-facing commands for the snapshot workflow (init, save,
//!   history, show, current)
//!
//! Plumbing commands expose the building blocks, while porcelain commands
//! compose them with storage into the save-and-review workflow.

pub mod plumbing;
pub mod porcelain;
