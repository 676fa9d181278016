//! Browser-local-storage equivalent: small JSON files under the platform
//! data directory. Persists the dark-mode flag and per-exercise drafts.

use color_eyre::{eyre::eyre, eyre::WrapErr, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Persisted user settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Dark color palette toggle.
    #[serde(default)]
    pub dark_mode: bool,
}

/// File-backed store for settings and exercise drafts.
///
/// Drafts are keyed by `(lesson_id, exercise_index)` and survive restarts
/// until a correct submission clears them individually.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Open the default store under the platform data directory.
    pub fn new() -> Result<Self> {
        let base = dirs::data_dir().ok_or_else(|| eyre!("No data directory available"))?;
        Self::at(base.join("mentor"))
    }

    /// Open a store rooted at an explicit directory (used by tests).
    pub fn at(root: PathBuf) -> Result<Self> {
        if !root.exists() {
            fs::create_dir_all(&root).wrap_err("Failed to create data directory")?;
        }
        Ok(Self { root })
    }

    /// Directory holding all persisted files (also used for the log file).
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn settings_path(&self) -> PathBuf {
        self.root.join("settings.json")
    }

    fn drafts_path(&self) -> PathBuf {
        self.root.join("drafts.json")
    }

    /// Load settings, defaulting when the file is missing or unreadable.
    pub fn load_settings(&self) -> Settings {
        let path = self.settings_path();
        let Ok(json) = fs::read_to_string(&path) else {
            return Settings::default();
        };
        match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Malformed settings file {:?}: {}", path, e);
                Settings::default()
            }
        }
    }

    /// Save settings to disk.
    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let json =
            serde_json::to_string_pretty(settings).wrap_err("Failed to serialize settings")?;
        fs::write(self.settings_path(), json)
            .wrap_err(format!("Failed to write {:?}", self.settings_path()))?;
        Ok(())
    }

    fn load_drafts(&self) -> HashMap<String, String> {
        let Ok(json) = fs::read_to_string(self.drafts_path()) else {
            return HashMap::new();
        };
        serde_json::from_str(&json).unwrap_or_default()
    }

    fn save_drafts(&self, drafts: &HashMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(drafts).wrap_err("Failed to serialize drafts")?;
        fs::write(self.drafts_path(), json)
            .wrap_err(format!("Failed to write {:?}", self.drafts_path()))?;
        Ok(())
    }

    fn draft_key(lesson_id: i64, exercise_index: usize) -> String {
        format!("{}:{}", lesson_id, exercise_index)
    }

    /// Load the saved draft for one exercise, if any.
    pub fn load_draft(&self, lesson_id: i64, exercise_index: usize) -> Option<String> {
        self.load_drafts()
            .remove(&Self::draft_key(lesson_id, exercise_index))
    }

    /// Save (or overwrite) the draft for one exercise.
    pub fn save_draft(&self, lesson_id: i64, exercise_index: usize, text: &str) -> Result<()> {
        let mut drafts = self.load_drafts();
        drafts.insert(Self::draft_key(lesson_id, exercise_index), text.to_string());
        self.save_drafts(&drafts)
    }

    /// Clear the draft for one exercise (after a correct submission).
    pub fn clear_draft(&self, lesson_id: i64, exercise_index: usize) -> Result<()> {
        let mut drafts = self.load_drafts();
        if drafts
            .remove(&Self::draft_key(lesson_id, exercise_index))
            .is_some()
        {
            self.save_drafts(&drafts)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::at(dir.path().to_path_buf()).unwrap();
        (dir, storage)
    }

    #[test]
    fn test_settings_round_trip() {
        let (_dir, storage) = test_storage();
        assert_eq!(storage.load_settings(), Settings::default());

        storage
            .save_settings(&Settings { dark_mode: true })
            .unwrap();
        assert!(storage.load_settings().dark_mode);
    }

    #[test]
    fn test_malformed_settings_fall_back_to_default() {
        let (_dir, storage) = test_storage();
        fs::write(storage.settings_path(), "{broken").unwrap();
        assert_eq!(storage.load_settings(), Settings::default());
    }

    #[test]
    fn test_draft_save_load_clear() {
        let (_dir, storage) = test_storage();
        assert!(storage.load_draft(3, 0).is_none());

        storage.save_draft(3, 0, "fn main() {}").unwrap();
        storage.save_draft(3, 1, "let x = 1;").unwrap();
        assert_eq!(storage.load_draft(3, 0).as_deref(), Some("fn main() {}"));

        // Clearing one draft leaves the other alone
        storage.clear_draft(3, 0).unwrap();
        assert!(storage.load_draft(3, 0).is_none());
        assert_eq!(storage.load_draft(3, 1).as_deref(), Some("let x = 1;"));
    }

    #[test]
    fn test_drafts_keyed_per_lesson() {
        let (_dir, storage) = test_storage();
        storage.save_draft(1, 0, "lesson one").unwrap();
        storage.save_draft(2, 0, "lesson two").unwrap();
        assert_eq!(storage.load_draft(1, 0).as_deref(), Some("lesson one"));
        assert_eq!(storage.load_draft(2, 0).as_deref(), Some("lesson two"));
    }
}
