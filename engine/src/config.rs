//! `~/.taskhub/config.toml` loading.
//!
//! ```toml
//! [app]
//! display_mode = "dark"   # "light", "dark" or "auto"
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//!
//! [notifications]
//! auto_close_ms = 4000
//! limit = 5
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use taskhub_types::{DisplayMode, UiOptions};

use crate::notifications::ToastSettings;

#[derive(Debug, Default, Deserialize)]
pub struct ShellConfig {
    pub app: Option<AppConfig>,
    pub notifications: Option<NotificationsConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Initial display mode: "light", "dark" or "auto" (defer to environment).
    pub display_mode: Option<String>,
    /// Use ASCII-only glyphs for icons.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable toast slide-in effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct NotificationsConfig {
    /// Milliseconds a toast stays visible. Default: 4000.
    pub auto_close_ms: Option<u64>,
    /// Maximum toasts on screen at once. Default: 5.
    pub limit: Option<usize>,
}

impl ShellConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from an explicit path. A missing file is not an error.
    ///
    /// Failures are returned, not logged; the caller decides how loud to be.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(config))
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Explicit display mode from `[app] display_mode`.
    ///
    /// `"auto"`, an absent key, or an unrecognized value all yield `None`.
    #[must_use]
    pub fn display_mode(&self) -> Option<DisplayMode> {
        let raw = self.app.as_ref()?.display_mode.as_deref()?;
        if raw.trim().eq_ignore_ascii_case("auto") {
            return None;
        }
        match raw.parse() {
            Ok(mode) => Some(mode),
            Err(err) => {
                tracing::warn!("Ignoring config display_mode: {err}");
                None
            }
        }
    }

    #[must_use]
    pub fn ui_options(config: Option<&Self>) -> UiOptions {
        let app = config.and_then(|cfg| cfg.app.as_ref());
        UiOptions {
            ascii_only: app.is_some_and(|cfg| cfg.ascii_only),
            high_contrast: app.is_some_and(|cfg| cfg.high_contrast),
            reduced_motion: app.is_some_and(|cfg| cfg.reduced_motion),
        }
    }

    #[must_use]
    pub fn toast_settings(config: Option<&Self>) -> ToastSettings {
        let defaults = ToastSettings::default();
        let section = config.and_then(|cfg| cfg.notifications.as_ref());
        ToastSettings {
            auto_close: section
                .and_then(|n| n.auto_close_ms)
                .map(Duration::from_millis)
                .unwrap_or(defaults.auto_close),
            enter_duration: defaults.enter_duration,
            limit: section.and_then(|n| n.limit).unwrap_or(defaults.limit),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".taskhub").join("config.toml"))
}
