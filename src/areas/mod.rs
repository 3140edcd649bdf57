//! Core repository components
//!
//! This module contains the building blocks of a tracked document:
//!
//! - `history`: version history storage (file-backed or in-memory)
//! - `repository`: high-level operations and coordination
//! - `workspace`: current text storage, the old side of the next diff

pub mod history;
pub mod repository;
pub mod workspace;
