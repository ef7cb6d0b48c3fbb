//! Persistence layer for user preferences
//!
//! The panel persists a single preference (the chosen language) across
//! restarts. Preferences are stored as a flat JSON object so that the file
//! stays readable and forward compatible with additional keys.

use crate::error::Result;
use crate::logging::get_logger;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Key under which the chosen language code is stored
pub const PREFERRED_LANGUAGE_KEY: &str = "preferredLanguage";

/// Minimal string key/value store for preferences
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences backed by a JSON file on disk
pub struct FilePreferences {
    file_path: PathBuf,
    values: Map<String, Value>,
    logger: crate::logging::StructuredLogger,
}

impl FilePreferences {
    /// Create a preference store for `file_path` without touching the disk
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            values: Map::new(),
            logger: get_logger("persistence"),
        }
    }

    /// Create a store and load whatever is on disk (best-effort)
    pub fn open<P: AsRef<Path>>(file_path: P) -> Self {
        let mut prefs = Self::new(file_path);
        if let Err(e) = prefs.load() {
            prefs
                .logger
                .warn(&format!("Ignoring unreadable preferences file: {}", e));
            prefs.values.clear();
        }
        prefs
    }

    /// Load preferences from disk
    pub fn load(&mut self) -> Result<()> {
        if !self.file_path.exists() {
            self.logger.info(&format!(
                "No preferences file at {}, using defaults",
                self.path().display()
            ));
            return Ok(());
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        self.values = serde_json::from_str(&contents)?;
        self.logger
            .debug(&format!("Loaded preferences from {}", self.path().display()));

        Ok(())
    }

    /// Save preferences to disk
    pub fn save(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.values)?;
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.file_path, contents)?;
        self.logger
            .debug(&format!("Saved preferences to {}", self.path().display()));

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
        self.save()
    }
}

/// In-memory preferences, used when no file is wanted
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: std::collections::HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
