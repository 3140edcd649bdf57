use crate::areas::history::{HistoryStore, InMemoryHistory, JsonFileHistory};
use crate::areas::workspace::{InMemoryWorkspace, JsonFileWorkspace, WorkspaceStore};
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Name of the data directory inside a tracked project
pub const DATA_DIR: &str = ".jot";

/// History file name inside the data directory
pub const VERSIONS_FILE: &str = "versions.json";

/// Current text file name inside the data directory
pub const CURRENT_TEXT_FILE: &str = "current-text.json";

/// Which storage backend the process runs against
///
/// Resolved once at startup; command implementations only ever see the trait
/// objects built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    File,
    Memory,
}

impl StorageMode {
    /// Resolve the backend from the `JOT_STORAGE` environment variable
    ///
    /// `memory` selects the in-memory backend; anything else (including an
    /// unset variable) selects the file backend.
    pub fn from_env() -> Self {
        match std::env::var("JOT_STORAGE") {
            Ok(value) if value.eq_ignore_ascii_case("memory") => StorageMode::Memory,
            _ => StorageMode::File,
        }
    }
}

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    history: Arc<Mutex<Box<dyn HistoryStore>>>,
    workspace: Arc<Mutex<Box<dyn WorkspaceStore>>>,
}

impl Repository {
    pub fn new(
        path: &str,
        mode: StorageMode,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path);
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;

        let data_dir = path.join(DATA_DIR);
        let (history, workspace): (Box<dyn HistoryStore>, Box<dyn WorkspaceStore>) = match mode {
            StorageMode::File => (
                Box::new(JsonFileHistory::new(
                    data_dir.join(VERSIONS_FILE).into_boxed_path(),
                )),
                Box::new(JsonFileWorkspace::new(
                    data_dir.join(CURRENT_TEXT_FILE).into_boxed_path(),
                )),
            ),
            StorageMode::Memory => (
                Box::new(InMemoryHistory::new()),
                Box::new(InMemoryWorkspace::new()),
            ),
        };

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            history: Arc::new(Mutex::new(history)),
            workspace: Arc::new(Mutex::new(workspace)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data_dir(&self) -> PathBuf {
        self.path.join(DATA_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn history_store(&self) -> Arc<Mutex<Box<dyn HistoryStore>>> {
        self.history.clone()
    }

    pub fn workspace(&self) -> Arc<Mutex<Box<dyn WorkspaceStore>>> {
        self.workspace.clone()
    }
}
