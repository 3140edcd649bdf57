use crate::areas::repository::Repository;
use crate::artifacts::diff::word_diff::WordDiff;
use colored::Colorize;

#[derive(Debug, Clone)]
pub struct WordDiffOptions {
    pub json: bool,
}

impl Repository {
    /// Diff two texts directly, without touching storage
    ///
    /// With `--json`, emits the diff in the same shape version entries use on
    /// disk (camelCase field names).
    pub async fn word_diff(
        &self,
        old_text: &str,
        new_text: &str,
        opts: &WordDiffOptions,
    ) -> anyhow::Result<()> {
        let diff = WordDiff::new(old_text, new_text).diff();

        if opts.json {
            writeln!(self.writer(), "{}", serde_json::to_string_pretty(&diff)?)?;
            return Ok(());
        }

        writeln!(
            self.writer(),
            "{}",
            format!("length {} -> {} chars", diff.old_length, diff.new_length).bold()
        )?;
        self.print_word_changes(&diff)?;

        Ok(())
    }
}
