//! Demo settings persistence
//!
//! Handles saving and loading display preferences and demo data sources.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Demo settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Demo page data and styling overrides
    #[serde(default)]
    pub demo: DemoSettings,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Interface language code ("en" or "zh")
    pub language: String,
    /// Power saving mode - disables hover animations
    #[serde(default)]
    pub power_saving_mode: bool,
}

/// Demo page settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoSettings {
    /// JSON array of ratings for the template loading section
    #[serde(default)]
    pub ratings_file: Option<PathBuf>,
    /// Star color of the custom color section, as `#rrggbb`
    #[serde(default)]
    pub star_color: Option<String>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: "en".to_string(),
            power_saving_mode: false,
        }
    }
}

/// Star color used by the custom color section when none is configured
pub const DEFAULT_CUSTOM_STAR_COLOR: &str = "#0000ff";

impl DemoSettings {
    /// Configured ratings file, or the bundled `assets/stars.json`
    pub fn ratings_path(&self) -> PathBuf {
        self.ratings_file
            .clone()
            .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/stars.json"))
    }

    /// Configured custom star color, falling back to blue
    pub fn custom_star_color(&self) -> &str {
        self.star_color
            .as_deref()
            .unwrap_or(DEFAULT_CUSTOM_STAR_COLOR)
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "star-rating", "StarRating")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    tracing::debug!("Using default settings ({}): {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("star-rating-test-{}-{}", std::process::id(), name))
            .join("settings.json")
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_settings_path("save-load");
        let mut settings = Settings::default();
        settings.display.dark_mode = false;
        settings.display.language = "zh".to_string();
        settings.demo.star_color = Some("#ff0000".to_string());

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());

        let settings: Settings =
            serde_json::from_str(r#"{"display":{"dark_mode":false,"language":"zh"}}"#).unwrap();
        assert!(!settings.display.dark_mode);
        assert!(!settings.display.power_saving_mode);
        assert_eq!(settings.demo, DemoSettings::default());
    }

    #[test]
    fn test_load_errors() {
        let path = temp_settings_path("missing");
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Io(_))
        ));

        let path = temp_settings_path("garbage");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_demo_defaults() {
        let demo = DemoSettings::default();
        assert!(demo.ratings_path().ends_with("assets/stars.json"));
        assert_eq!(demo.custom_star_color(), DEFAULT_CUSTOM_STAR_COLOR);
    }
}
