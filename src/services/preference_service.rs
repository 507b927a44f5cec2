// Preference service
// Manages user navigation preferences: loading, saving, and updating the
// recent-pages bound. Preferences are stored as a JSON file.

use std::fs;
use std::path::Path;

use crate::types::errors::PreferenceError;
use crate::types::preferences::NavigationPreferences;

/// Trait defining the preference service interface.
pub trait PreferenceServiceTrait {
    fn load(&mut self) -> Result<NavigationPreferences, PreferenceError>;
    fn save(&self) -> Result<(), PreferenceError>;
    fn get_preferences(&self) -> &NavigationPreferences;
    fn set_max_recent_pages(&mut self, max: usize) -> Result<(), PreferenceError>;
    fn get_config_path(&self) -> &str;
}

/// Preference service implementation that persists preferences as JSON on disk.
pub struct PreferenceService {
    config_path: String,
    preferences: NavigationPreferences,
}

impl PreferenceService {
    /// Creates a new PreferenceService storing preferences at `config_path`.
    pub fn new(config_path: String) -> Self {
        Self {
            config_path,
            preferences: NavigationPreferences::default(),
        }
    }
}

impl PreferenceServiceTrait for PreferenceService {
    /// Loads preferences from the JSON config file.
    ///
    /// If the file does not exist, returns defaults. If the file exists but
    /// is malformed, returns a serialization error.
    fn load(&mut self) -> Result<NavigationPreferences, PreferenceError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.preferences = NavigationPreferences::default();
            return Ok(self.preferences.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| PreferenceError::IoError(format!("Failed to read config file: {}", e)))?;

        let preferences: NavigationPreferences = serde_json::from_str(&content).map_err(|e| {
            PreferenceError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        self.preferences = preferences;
        Ok(self.preferences.clone())
    }

    /// Saves the current preferences to the JSON config file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), PreferenceError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PreferenceError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.preferences).map_err(|e| {
            PreferenceError::SerializationError(format!("Failed to serialize preferences: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| PreferenceError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Returns a reference to the current in-memory preferences.
    fn get_preferences(&self) -> &NavigationPreferences {
        &self.preferences
    }

    /// Updates the recent-pages bound and persists to disk.
    ///
    /// A bound of zero would make the recent list unusable, so it is clamped
    /// to at least one.
    fn set_max_recent_pages(&mut self, max: usize) -> Result<(), PreferenceError> {
        self.preferences.max_recent_pages = max.max(1);
        self.save()?;
        Ok(())
    }

    /// Returns the path to the config file.
    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
