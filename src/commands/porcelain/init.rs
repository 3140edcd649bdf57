use crate::areas::repository::{Repository, VERSIONS_FILE};
use anyhow::Context;
use std::fs;

impl Repository {
    pub async fn init(&mut self) -> anyhow::Result<()> {
        fs::create_dir_all(self.data_dir()).context("Failed to create .jot directory")?;

        // make sure the history file exists
        let versions_path = self.data_dir().join(VERSIONS_FILE);
        if !versions_path.exists() {
            fs::write(&versions_path, b"[]").context("Failed to create versions file")?;
        }

        let workspace = self.workspace();
        let mut workspace = workspace.lock().await;
        if workspace.current_text()?.is_empty() {
            workspace
                .save_text("")
                .context("Failed to create current text file")?;
        }

        write!(
            self.writer(),
            "Initialized empty jot repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
