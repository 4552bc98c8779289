//! Runtime configuration read from the environment.
//!
//! Variables come from the process environment, a `.env` file, or the
//! bundled `assets/config.env`, in that order of precedence.

use crate::types::ThemeMode;
use std::env;
use std::path::PathBuf;

pub const COLOR_SCHEME_VAR: &str = "JSONSMITH_COLOR_SCHEME";
pub const DATA_DIR_VAR: &str = "JSONSMITH_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unrecognised colour scheme '{0}', expected 'light' or 'dark'")]
    ColorScheme(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Overrides the platform's `prefers-color-scheme` reading when no theme
    /// has been saved yet.
    pub color_scheme: Option<ThemeMode>,
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let color_scheme = env::var(COLOR_SCHEME_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .and_then(|value| match parse_color_scheme(&value) {
                Ok(mode) => Some(mode),
                Err(err) => {
                    tracing::warn!(%err, "ignoring colour scheme setting");
                    None
                }
            });
        let data_dir = env::var(DATA_DIR_VAR).ok().map(PathBuf::from);
        Self {
            color_scheme,
            data_dir,
        }
    }

    pub fn ambient_dark(&self) -> bool {
        matches!(self.color_scheme, Some(ThemeMode::Dark))
    }

    /// Whether the platform colour scheme should be queried at startup.
    pub fn follows_platform_scheme(&self) -> bool {
        self.color_scheme.is_none()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn preference_store(&self) -> crate::preferences::FilePreferenceStore {
        match &self.data_dir {
            Some(dir) => crate::preferences::FilePreferenceStore::new(dir.join("preferences")),
            None => crate::preferences::FilePreferenceStore::default_location(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn preference_store(&self) -> crate::preferences::LocalStoragePreferenceStore {
        crate::preferences::LocalStoragePreferenceStore::new()
    }
}

pub fn parse_color_scheme(value: &str) -> Result<ThemeMode, ConfigError> {
    ThemeMode::parse(value).ok_or_else(|| ConfigError::ColorScheme(value.trim().to_string()))
}

/// `KEY=VALUE` pairs of a dotenv-style file. Blank lines and `#` comments
/// are skipped.
pub fn parse_env_lines(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}
