use crate::areas::repository::Repository;
use crate::artifacts::diff::word_diff::WordDiff;
use crate::artifacts::version::VersionEntry;
use colored::Colorize;

impl Repository {
    /// Save a new snapshot of the tracked text
    ///
    /// Diffs the new text against the stored current text, records the
    /// resulting version entry, and makes the new text the current one for
    /// the next comparison.
    pub async fn save(&mut self, text: &str) -> anyhow::Result<()> {
        let workspace = self.workspace();
        let mut workspace = workspace.lock().await;
        let previous_text = workspace.current_text()?;

        let diff = WordDiff::new(&previous_text, text).diff();
        let entry = VersionEntry::new(diff);

        let history = self.history_store();
        let mut history = history.lock().await;
        history.append(entry.clone())?;
        workspace.save_text(text)?;

        writeln!(
            self.writer(),
            "Saved version {} ({} -> {} chars)",
            entry.short_id().bold(),
            entry.diff().old_length,
            entry.diff().new_length
        )?;
        self.print_word_changes(entry.diff())?;

        Ok(())
    }
}
