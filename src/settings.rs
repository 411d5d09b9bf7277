//! User settings stored as settings.json in the app data directory

use crate::constants::{API_BASE_ENV_VAR, DEFAULT_API_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Shortener service base URL (origin of shortened links)
    pub api_base_url: Option<String>,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Resolve the API base URL: environment variable wins, then the
    /// persisted setting, then the compiled default. Trailing slashes are
    /// trimmed so `{origin}/{alias}` composes cleanly.
    pub fn resolve_api_base(&self) -> String {
        std::env::var(API_BASE_ENV_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.api_base_url.is_none());
        assert!(settings.window_w.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_x: Some(10.0),
            window_y: Some(20.0),
            window_w: Some(560.0),
            window_h: Some(760.0),
            api_base_url: Some("https://sho.rt".into()),
        };
        settings.save(dir.path());
        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.api_base_url.as_deref(), Some("https://sho.rt"));
        assert_eq!(loaded.window_w, Some(560.0));
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{not json").unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.api_base_url.is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let settings = Settings {
            api_base_url: Some("https://sho.rt///".into()),
            ..Default::default()
        };
        assert_eq!(settings.resolve_api_base(), "https://sho.rt");
    }
}
