use crate::areas::repository::Repository;

impl Repository {
    /// Print the stored current text exactly as saved
    pub async fn current(&self) -> anyhow::Result<()> {
        let workspace = self.workspace();
        let workspace = workspace.lock().await;
        let text = workspace.current_text()?;
        drop(workspace);

        write!(self.writer(), "{}", text)?;
        if !text.is_empty() && !text.ends_with('\n') {
            writeln!(self.writer())?;
        }

        Ok(())
    }
}
