//! Display-mode preference: persistence and startup resolution.
//!
//! Only the display mode survives a restart. The task counter is never written
//! anywhere.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use taskhub_types::DisplayMode;

pub const DISPLAY_MODE_ENV: &str = "TASKHUB_DISPLAY_MODE";

/// Persisted display preference.
///
/// The `version` field guards against schema changes: a file written by a
/// different version is ignored and resolution falls through to config/env.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPreference {
    pub display_mode: DisplayMode,
    pub version: u32,
}

impl DisplayPreference {
    pub const CURRENT_VERSION: u32 = 1;

    pub const FILENAME: &'static str = "preferences.json";

    #[must_use]
    pub fn new(display_mode: DisplayMode) -> Self {
        Self {
            display_mode,
            version: Self::CURRENT_VERSION,
        }
    }

    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.version == Self::CURRENT_VERSION
    }
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference IO failed at {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("preference file {} is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// JSON file holding a [`DisplayPreference`].
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DisplayPreference::FILENAME))
    }

    /// `<data_local_dir>/taskhub/preferences.json`, if the platform has one.
    #[must_use]
    pub fn default_location() -> Option<Self> {
        dirs::data_local_dir().map(|dir| Self::in_dir(&dir.join("taskhub")))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored preference. Missing or incompatible files yield `None`.
    pub fn load(&self) -> Result<Option<DisplayPreference>, PreferenceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let pref: DisplayPreference =
            serde_json::from_slice(&bytes).map_err(|source| PreferenceError::Json {
                path: self.path.clone(),
                source,
            })?;

        if !pref.is_compatible() {
            tracing::debug!(
                version = pref.version,
                "Ignoring display preference from another schema version"
            );
            return Ok(None);
        }
        Ok(Some(pref))
    }

    /// Write the preference via temp file + rename so readers never see a partial file.
    pub fn save(&self, display_mode: DisplayMode) -> Result<(), PreferenceError> {
        let io_err = |source: io::Error| PreferenceError::Io {
            path: self.path.clone(),
            source,
        };

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(io_err)?;

        let json = serde_json::to_vec_pretty(&DisplayPreference::new(display_mode)).map_err(
            |source| PreferenceError::Json {
                path: self.path.clone(),
                source,
            },
        )?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(io_err)?;
        tmp.write_all(&json).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|err| io_err(err.error))?;
        Ok(())
    }
}

/// Where the initial display mode came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayModeSource {
    Preference,
    Config,
    Environment,
    Terminal,
    Default,
}

/// Inputs to startup display-mode resolution, highest priority first.
#[derive(Debug, Clone, Default)]
pub struct DisplayModeHints {
    pub preference: Option<DisplayMode>,
    pub config: Option<DisplayMode>,
    /// Raw `TASKHUB_DISPLAY_MODE` value.
    pub env: Option<String>,
    /// Raw `COLORFGBG` value (`"<fg>;<bg>"`), set by many terminals.
    pub colorfgbg: Option<String>,
}

impl DisplayModeHints {
    /// Fill the environment-derived hints from the current process.
    #[must_use]
    pub fn with_process_env(self) -> Self {
        Self {
            env: env::var(DISPLAY_MODE_ENV).ok(),
            colorfgbg: env::var("COLORFGBG").ok(),
            ..self
        }
    }
}

#[must_use]
pub fn resolve_display_mode(hints: &DisplayModeHints) -> (DisplayMode, DisplayModeSource) {
    if let Some(mode) = hints.preference {
        return (mode, DisplayModeSource::Preference);
    }
    if let Some(mode) = hints.config {
        return (mode, DisplayModeSource::Config);
    }
    if let Some(raw) = hints.env.as_deref()
        && !raw.trim().eq_ignore_ascii_case("auto")
    {
        match raw.parse() {
            Ok(mode) => return (mode, DisplayModeSource::Environment),
            Err(err) => tracing::warn!("Ignoring {DISPLAY_MODE_ENV}: {err}"),
        }
    }
    if let Some(mode) = hints.colorfgbg.as_deref().and_then(mode_from_colorfgbg) {
        return (mode, DisplayModeSource::Terminal);
    }
    (DisplayMode::default(), DisplayModeSource::Default)
}

/// Background index 0-6 and 8 are the dark ANSI colors.
fn mode_from_colorfgbg(value: &str) -> Option<DisplayMode> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(if matches!(bg, 0..=6 | 8) {
        DisplayMode::Dark
    } else {
        DisplayMode::Light
    })
}
