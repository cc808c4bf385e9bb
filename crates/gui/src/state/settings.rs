//! Application settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::features::FeatureName;
use crate::i18n::Lang;
use crate::loader::LoaderOptions;
use crate::setup::TourFeatureSelection;

/// UI language as stored in the settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl From<Language> for Lang {
    fn from(language: Language) -> Self {
        match language {
            Language::Ru => Lang::Ru,
            Language::En => Lang::En,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
    #[serde(default)]
    pub language: Language,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            language: Language::default(),
        }
    }
}

/// Tour defaults applied to newly opened documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourSettings {
    /// Feature keys enabled for tours, e.g. `"navigation"`
    pub default_features: Vec<String>,
}

impl Default for TourSettings {
    fn default() -> Self {
        Self {
            default_features: vec![FeatureName::Navigation.as_str().to_string()],
        }
    }
}

impl TourSettings {
    /// Unknown keys are skipped
    pub fn selection(&self) -> TourFeatureSelection {
        TourFeatureSelection::enabled(self.default_features.iter().filter_map(|key| {
            key.parse::<FeatureName>()
                .map_err(|e| warn!("ignoring tour feature setting: {e}"))
                .ok()
        }))
    }
}

/// Model loader settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderSettings {
    /// Centre each mesh geometry on its bounding box
    pub center_geometry: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            center_geometry: true,
        }
    }
}

impl From<&LoaderSettings> for LoaderOptions {
    fn from(settings: &LoaderSettings) -> Self {
        LoaderOptions {
            center_geometry: settings.center_geometry,
        }
    }
}

/// All application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub ui: UiSettings,
    #[serde(default)]
    pub tours: TourSettings,
    #[serde(default)]
    pub loader: LoaderSettings,
}

impl AppSettings {
    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "voyager", "voyager")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the config dir, or return defaults
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load settings from `path`, or return defaults
    pub fn load_from(path: &Path) -> Self {
        let Ok(json) = std::fs::read_to_string(path) else {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        };
        serde_json::from_str(&json).unwrap_or_else(|e| {
            warn!(path = %path.display(), "invalid settings file: {e}");
            Self::default()
        })
    }

    /// Save settings to the config dir
    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            self.save_to(&path);
        }
    }

    /// Save settings to `path`; failures are logged
    pub fn save_to(&self, path: &Path) {
        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                warn!(path = %dir.display(), "cannot create settings dir: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    warn!(path = %path.display(), "cannot write settings: {e}");
                }
            }
            Err(e) => warn!("cannot serialize settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load_from(&dir.path().join("settings.json"));
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = AppSettings::default();
        settings.ui.font_size = 18.0;
        settings.ui.language = Language::En;
        settings.tours.default_features = vec!["grid".to_string(), "slicer".to_string()];
        settings.save_to(&path);

        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "ui": { "font_size": 12.0 } }"#).unwrap();

        let settings = AppSettings::load_from(&path);
        assert_eq!(settings.ui.font_size, 12.0);
        assert_eq!(settings.ui.language, Language::Ru);
        assert!(settings.loader.center_geometry);
    }

    #[test]
    fn test_tour_selection_skips_unknown() {
        let tours = TourSettings {
            default_features: vec!["grid".to_string(), "sky".to_string()],
        };
        assert_eq!(tours.selection().enabled_names(), vec![FeatureName::Grid]);
    }
}
