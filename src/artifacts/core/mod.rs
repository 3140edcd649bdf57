//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application.

use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter over the minus pager
///
/// Command implementations write to a plain `std::io::Write` sink; this
/// adapter lets that sink be a pager. Push output through it, then hand the
/// pager to [`minus::page_all`] once the command finishes.
#[derive(Clone)]
pub struct PagerWriter(Pager);

impl PagerWriter {
    pub fn new(pager: Pager) -> Self {
        PagerWriter(pager)
    }

    pub fn into_pager(self) -> Pager {
        self.0
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.0.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Whether long output should go through the pager
///
/// Paging only makes sense on an interactive terminal, and `NO_PAGER` opts
/// out (the integration tests rely on it).
pub fn should_page() -> bool {
    io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none()
}
