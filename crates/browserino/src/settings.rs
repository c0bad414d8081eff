//! Persisted configuration: routing rules, menu-bar preference and the
//! recorded browser list. One JSON document, read and written whole.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::platform::types::Browser;
use crate::rules::Rule;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Ordered routing rules; array order is priority order.
    pub rules: Vec<Rule>,
    pub show_in_menu_bar: bool,
    /// `None` until browser discovery has run once; gates the first-run
    /// preferences prompt.
    pub browsers: Option<Vec<Browser>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            show_in_menu_bar: true,
            browsers: None,
        }
    }
}

pub trait SettingsStore: Send + Sync {
    fn load(&self) -> AppResult<Settings>;
    fn save(&self, settings: &Settings) -> AppResult<()>;
}

// --- Memory Implementation ---

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Settings>,
}

impl MemoryStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: Mutex::new(settings),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> AppResult<Settings> {
        self.inner
            .lock()
            .map(|settings| settings.clone())
            .map_err(|_| AppError::Storage("settings store poisoned".to_string()))
    }

    fn save(&self, settings: &Settings) -> AppResult<()> {
        self.inner
            .lock()
            .map(|mut inner| *inner = settings.clone())
            .map_err(|_| AppError::Storage("settings store poisoned".to_string()))
    }
}

// --- File Implementation ---

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `~/Library/Application Support/Browserino/settings.json`.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Path::new(&home)
            .join("Library")
            .join("Application Support")
            .join("Browserino")
            .join("settings.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileStore {
    fn load(&self) -> AppResult<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let raw = std::fs::read_to_string(&self.path).map_err(|error| {
            AppError::Storage(format!("failed to read {}: {error}", self.path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|error| {
            AppError::Storage(format!("failed to parse {}: {error}", self.path.display()))
        })
    }

    fn save(&self, settings: &Settings) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                AppError::Storage(format!(
                    "failed to create settings directory {}: {error}",
                    parent.display()
                ))
            })?;
        }
        let serialized = serde_json::to_vec_pretty(settings)
            .map_err(|error| AppError::Storage(format!("settings serialize error: {error}")))?;
        std::fs::write(&self.path, serialized).map_err(|error| {
            AppError::Storage(format!("failed to write {}: {error}", self.path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Settings {
        Settings {
            rules: vec![
                Rule {
                    pattern: r"github\.com".to_string(),
                    app: "com.google.Chrome".to_string(),
                },
                Rule {
                    pattern: r"gitlab\.com".to_string(),
                    app: "org.mozilla.firefox".to_string(),
                },
            ],
            show_in_menu_bar: false,
            browsers: Some(vec![Browser {
                name: "Firefox".to_string(),
                bundle_id: "org.mozilla.firefox".to_string(),
                path: "/Applications/Firefox.app".to_string(),
            }]),
        }
    }

    #[test]
    fn defaults_show_menu_bar_and_have_no_browsers() {
        let settings = Settings::default();
        assert!(settings.show_in_menu_bar);
        assert!(settings.browsers.is_none());
        assert!(settings.rules.is_empty());
    }

    #[test]
    fn storage_keys_use_the_settings_names() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert!(json.get("rules").is_some());
        assert!(json.get("showInMenuBar").is_some());
        assert!(json.get("browsers").is_some());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn file_store_round_trip_preserves_rule_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("settings.json"));

        store.save(&sample()).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, sample());
        assert_eq!(loaded.rules[0].app, "com.google.Chrome");
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nope").join("settings.json"));
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("a").join("b").join("settings.json"));
        store.save(&Settings::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::default();
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }
}
