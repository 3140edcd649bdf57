use crate::areas::repository::Repository;
use crate::artifacts::diff::word_diff::TextDiff;
use crate::artifacts::version::VersionEntry;
use colored::Colorize;

#[derive(Debug, Clone)]
pub struct HistoryOptions {
    pub oneline: bool,
    pub limit: Option<usize>,
}

impl Repository {
    /// Print the version history, newest first
    pub async fn history(&self, opts: &HistoryOptions) -> anyhow::Result<()> {
        let history = self.history_store();
        let history = history.lock().await;
        let mut versions = history.versions()?;
        drop(history);

        if versions.is_empty() {
            writeln!(self.writer(), "No versions saved yet")?;
            return Ok(());
        }

        // newest first
        versions.reverse();
        if let Some(limit) = opts.limit {
            versions.truncate(limit);
        }

        for entry in &versions {
            self.display_version(entry, opts)?;
        }

        Ok(())
    }

    fn display_version(&self, entry: &VersionEntry, opts: &HistoryOptions) -> anyhow::Result<()> {
        if opts.oneline {
            self.show_version_oneline(entry)
        } else {
            self.show_version_medium(entry)
        }
    }

    fn show_version_oneline(&self, entry: &VersionEntry) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {} {} {}",
            entry.short_id().yellow(),
            entry.timestamp(),
            format!("+{}", entry.diff().added_words.len()).green(),
            format!("-{}", entry.diff().removed_words.len()).red()
        )?;

        Ok(())
    }

    pub(crate) fn show_version_medium(&self, entry: &VersionEntry) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", format!("version {}", entry.id()).yellow())?;
        writeln!(self.writer(), "Date:   {}", entry.timestamp())?;
        writeln!(
            self.writer(),
            "Length: {} -> {} chars",
            entry.diff().old_length,
            entry.diff().new_length
        )?;
        self.print_word_changes(entry.diff())?;
        writeln!(self.writer())?;

        Ok(())
    }

    /// Render the added/removed word lists of a diff, one word per line
    pub(crate) fn print_word_changes(&self, diff: &TextDiff) -> anyhow::Result<()> {
        if diff.is_unchanged() {
            writeln!(self.writer(), "    {}", "no word changes".dimmed())?;
            return Ok(());
        }

        for word in &diff.added_words {
            writeln!(self.writer(), "    {}", format!("+{}", word).green())?;
        }
        for word in &diff.removed_words {
            writeln!(self.writer(), "    {}", format!("-{}", word).red())?;
        }

        Ok(())
    }
}
