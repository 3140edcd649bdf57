//! Snapshot tracker data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `core`: shared utilities (pager wrapper, etc.)
//! - `diff`: word-level multiset diffing between text versions
//! - `version`: version history entry types

pub mod core;
pub mod diff;
pub mod version;
