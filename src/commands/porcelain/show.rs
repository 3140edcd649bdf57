use crate::areas::repository::Repository;

impl Repository {
    /// Print a single version entry, looked up by unique id prefix
    pub async fn show(&self, id_prefix: &str) -> anyhow::Result<()> {
        let history = self.history_store();
        let history = history.lock().await;
        let versions = history.versions()?;
        drop(history);

        let matches = versions
            .iter()
            .filter(|entry| entry.matches_id_prefix(id_prefix))
            .collect::<Vec<_>>();

        match matches.as_slice() {
            [] => anyhow::bail!("version {} not found", id_prefix),
            [entry] => self.show_version_medium(entry),
            _ => anyhow::bail!("version id prefix {} is ambiguous", id_prefix),
        }
    }
}
