//! Reading-level and language preferences persisted as a small JSON file
//!
//! The file holds a single object:
//! `{ "version": 1, "readingLevel": "general", "language": "en" }`.
//! Objects written before versioning (no `version` field) are still read.
//! A file that cannot be read or parsed yields the defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

pub const SCHEMA_VERSION: u32 = 1;
pub const PREFERENCES_FILE: &str = "medease-preferences.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid preferences JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported preferences version {0}")]
    UnsupportedVersion(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingLevel {
    Simple,
    #[default]
    General,
    Advanced,
    Professional,
}

impl ReadingLevel {
    pub fn all() -> [ReadingLevel; 4] {
        [
            ReadingLevel::Simple,
            ReadingLevel::General,
            ReadingLevel::Advanced,
            ReadingLevel::Professional,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadingLevel::Simple => "Simple (Elementary)",
            ReadingLevel::General => "General (Middle School)",
            ReadingLevel::Advanced => "Advanced (High School)",
            ReadingLevel::Professional => "Professional",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReadingLevel::Simple => "Basic vocabulary, short sentences",
            ReadingLevel::General => "Everyday language, clear explanations",
            ReadingLevel::Advanced => "More detail, some medical terms",
            ReadingLevel::Professional => "Full medical terminology with explanations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    Zh,
    Hi,
}

impl Language {
    pub fn all() -> [Language; 6] {
        [Language::En, Language::Es, Language::Fr, Language::De, Language::Zh, Language::Hi]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Zh => "zh",
            Language::Hi => "hi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Language::all().into_iter().find(|l| l.code() == code.to_lowercase())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::Zh => "中文",
            Language::Hi => "हिन्दी",
        }
    }

    /// Next language in selector order, wrapping around
    pub fn next(&self) -> Self {
        let all = Language::all();
        let i = all.iter().position(|l| l == self).unwrap_or(0);
        all[(i + 1) % all.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub reading_level: ReadingLevel,
    pub language: Language,
}

/// On-disk shape of the preferences object
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<u32>,
    reading_level: ReadingLevel,
    language: Language,
}

#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the user's config directory
    pub fn default_location() -> Result<Self, StoreError> {
        let config_dir = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self::new(config_dir.join("medease").join(PREFERENCES_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored preferences. `Ok(None)` when nothing has been saved yet.
    pub fn read(&self) -> Result<Option<Preferences>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let stored: StoredPreferences = serde_json::from_str(&content)?;

        match stored.version {
            None | Some(SCHEMA_VERSION) => Ok(Some(Preferences {
                reading_level: stored.reading_level,
                language: stored.language,
            })),
            Some(other) => Err(StoreError::UnsupportedVersion(other)),
        }
    }

    /// Stored preferences, falling back to defaults on any failure
    pub fn load(&self) -> Preferences {
        match self.read() {
            Ok(Some(prefs)) => {
                debug!(path = %self.path.display(), ?prefs, "Loaded preferences");
                prefs
            }
            Ok(None) => Preferences::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable preferences");
                Preferences::default()
            }
        }
    }

    pub fn save(&self, prefs: &Preferences) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let stored = StoredPreferences {
            version: Some(SCHEMA_VERSION),
            reading_level: prefs.reading_level,
            language: prefs.language,
        };
        let content = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), "Saved preferences");
        Ok(())
    }
}
