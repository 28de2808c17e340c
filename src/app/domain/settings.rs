use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Base URL of the README generation service, without trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Restore the last saved draft when the window opens.
    #[serde(default = "default_restore_draft")]
    pub restore_draft: bool,

    #[serde(default = "default_autosave_enabled")]
    pub autosave_enabled: bool,

    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,
}

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_restore_draft() -> bool {
    true
}

fn default_autosave_enabled() -> bool {
    true
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            restore_draft: default_restore_draft(),
            autosave_enabled: default_autosave_enabled(),
            theme_mode: default_theme_mode(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults and write them for next time
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    tracing::debug!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Base URL with any trailing slashes removed.
    pub fn api_base(&self) -> Result<&str, AppError> {
        let base = self.api_base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(AppError::Settings("api_base_url is empty".to_string()));
        }
        Ok(base)
    }

    pub fn is_dark(&self) -> bool {
        self.theme_mode == ThemeMode::Dark
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("readmeforge");
        path.push("settings.json");
        path
    }
}
