use super::DataStore;
use crate::error::{KnowhowError, Result};
use crate::model::UsageNote;
use std::fs;
use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "notes.json";

/// File-backed store: the whole collection lives in one JSON file.
pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        if name.ends_with(".json") {
            self.data_file = name.to_string();
        } else {
            self.data_file = format!("{}.json", name);
        }
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(KnowhowError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_notes(&self) -> Result<Vec<UsageNote>> {
        let path = self.data_path();
        // A store that was never written is an empty collection
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(KnowhowError::Io)?;
        let notes: Vec<UsageNote> =
            serde_json::from_str(&content).map_err(KnowhowError::Serialization)?;
        Ok(notes)
    }

    fn save_notes(&mut self, notes: &[UsageNote]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(notes).map_err(KnowhowError::Serialization)?;
        fs::write(self.data_path(), content).map_err(KnowhowError::Io)?;
        Ok(())
    }
}
