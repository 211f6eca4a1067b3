use crate::error::{Result, ShelfError};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by `shelf config`.
pub const KEYS: &[&str] = &["data-file"];

/// Configuration for shelf, stored as config.json in the user config dir
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Library file to use when neither `--file` nor `SHELF_FILE` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| format!("(default: ./{})", DEFAULT_DATA_FILE)),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = Some(PathBuf::from(value));
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

/// Picks the library file: `--file`, then `SHELF_FILE`, then config, then
/// `library_data.json` in `cwd`. Relative config paths resolve against `cwd`.
pub fn resolve_data_file(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    config: &ShelfConfig,
    cwd: &Path,
) -> PathBuf {
    flag.or(env)
        .or_else(|| config.data_file.clone())
        .map(|p| if p.is_relative() { cwd.join(p) } else { p })
        .unwrap_or_else(|| cwd.join(DEFAULT_DATA_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ShelfConfig::load(dir.path().join("missing")).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("shelf");

        let mut config = ShelfConfig::default();
        config.set("data-file", "/srv/books.json").unwrap();
        config.save(&config_dir).unwrap();

        let loaded = ShelfConfig::load(&config_dir).unwrap();
        assert_eq!(loaded.data_file, Some(PathBuf::from("/srv/books.json")));
    }

    #[test]
    fn test_get_and_set_keys() {
        let mut config = ShelfConfig::default();
        assert!(config.get("data-file").unwrap().contains("library_data.json"));
        assert!(config.get("colour").is_none());

        assert!(config.set("data-file", "  ").is_err());
        assert!(config.set("colour", "red").is_err());
        config.set("data-file", "books.json").unwrap();
        assert_eq!(config.get("data-file").as_deref(), Some("books.json"));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{").unwrap();
        assert!(ShelfConfig::load(dir.path()).is_err());
    }

    #[test]
    fn test_resolve_data_file_precedence() {
        let cwd = Path::new("/home/reader");
        let config = ShelfConfig {
            data_file: Some(PathBuf::from("/etc/books.json")),
        };

        let flag = resolve_data_file(
            Some(PathBuf::from("/a.json")),
            Some(PathBuf::from("/b.json")),
            &config,
            cwd,
        );
        assert_eq!(flag, PathBuf::from("/a.json"));

        let env = resolve_data_file(None, Some(PathBuf::from("/b.json")), &config, cwd);
        assert_eq!(env, PathBuf::from("/b.json"));

        let from_config = resolve_data_file(None, None, &config, cwd);
        assert_eq!(from_config, PathBuf::from("/etc/books.json"));

        let fallback = resolve_data_file(None, None, &ShelfConfig::default(), cwd);
        assert_eq!(fallback, PathBuf::from("/home/reader/library_data.json"));
    }

    #[test]
    fn test_relative_paths_resolve_against_cwd() {
        let cwd = Path::new("/home/reader");
        let path = resolve_data_file(
            Some(PathBuf::from("books/mine.json")),
            None,
            &ShelfConfig::default(),
            cwd,
        );
        assert_eq!(path, PathBuf::from("/home/reader/books/mine.json"));
    }
}
