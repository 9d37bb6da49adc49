use crate::error::{KnowhowError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "notes.json";

/// Configuration for knowhow, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KnowhowConfig {
    /// Snapshot file the collection persists to (e.g. "notes.json",
    /// "work.json"). Switching it switches between collections.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for KnowhowConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl KnowhowConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(KnowhowError::Io)?;
        let config: KnowhowConfig =
            serde_json::from_str(&content).map_err(KnowhowError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(KnowhowError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(KnowhowError::Serialization)?;
        fs::write(config_path, content).map_err(KnowhowError::Io)?;
        Ok(())
    }

    pub fn get_data_file(&self) -> &str {
        &self.data_file
    }

    /// Set the data file name (normalizes to a .json filename)
    pub fn set_data_file(&mut self, name: &str) {
        if name.ends_with(".json") {
            self.data_file = name.to_string();
        } else {
            self.data_file = format!("{}.json", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KnowhowConfig::default();
        assert_eq!(config.data_file, "notes.json");
    }

    #[test]
    fn test_set_data_file_with_extension() {
        let mut config = KnowhowConfig::default();
        config.set_data_file("work.json");
        assert_eq!(config.data_file, "work.json");
    }

    #[test]
    fn test_set_data_file_without_extension() {
        let mut config = KnowhowConfig::default();
        config.set_data_file("work");
        assert_eq!(config.data_file, "work.json");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = KnowhowConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, KnowhowConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = KnowhowConfig::default();
        config.set_data_file("recipes");
        config.save(temp_dir.path()).unwrap();

        let loaded = KnowhowConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.data_file, "recipes.json");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = KnowhowConfig {
            data_file: "side-projects.json".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: KnowhowConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
