use crate::error::{DbError, Result};
use crate::protocol::DEFAULT_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for a database directory, stored in `<base>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Field separator the dispatcher starts with (e.g. "|", ",")
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

impl Config {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DbError::Io)?;
        let config: Config = serde_json::from_str(&content).map_err(DbError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, base_dir: P) -> Result<()> {
        let base_dir = base_dir.as_ref();

        if !base_dir.exists() {
            fs::create_dir_all(base_dir).map_err(DbError::Io)?;
        }

        let config_path = base_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DbError::Serialization)?;
        fs::write(config_path, content).map_err(DbError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.separator, "|");
    }

    #[test]
    fn load_missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let config = Config {
            separator: ",".to_string(),
        };
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.separator, ",");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.separator, "|");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();

        assert!(Config::load(dir.path()).is_err());
    }
}
