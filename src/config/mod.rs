//! Configuration for the feedback form
//!
//! [`Appearance`] holds the texts and fonts the form is themed with and can be
//! persisted as JSON. [`Snapshot`] bundles the appearance with the flags read
//! from the log subsystem and the captured screenshot.

mod snapshot;

pub use snapshot::{LogSupport, Screenshot, Snapshot, StaticLogSupport};

use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A font description used by the form rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Font {
    /// Font family name
    #[serde(default = "default_family")]
    pub family: String,

    /// Point size
    #[serde(default = "default_body_size")]
    pub size: u16,

    /// Bold weight
    #[serde(default)]
    pub bold: bool,

    /// Italic style
    #[serde(default)]
    pub italic: bool,
}

fn default_family() -> String {
    "system".to_string()
}

const fn default_body_size() -> u16 {
    17
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: default_family(),
            size: default_body_size(),
            bold: false,
            italic: false,
        }
    }
}

impl Font {
    /// Font used for secondary hint text
    #[must_use]
    pub fn hint() -> Self {
        Self {
            size: 13,
            italic: true,
            ..Self::default()
        }
    }
}

/// Interface texts and fonts for the form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appearance {
    /// Title of the log collection row
    #[serde(default = "default_collect_logs_title")]
    pub collect_logs_title: String,

    /// Hint shown under the screenshot, if any
    #[serde(default = "default_screenshot_hint")]
    pub screenshot_hint: Option<String>,

    /// Font for row titles
    #[serde(default)]
    pub body_font: Font,

    /// Font for the screenshot hint
    #[serde(default = "Font::hint")]
    pub hint_font: Font,
}

fn default_collect_logs_title() -> String {
    "Collect Logs".to_string()
}

#[expect(
    clippy::unnecessary_wraps,
    reason = "serde default functions must return the field type"
)]
fn default_screenshot_hint() -> Option<String> {
    Some("Tap to preview".to_string())
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            collect_logs_title: default_collect_logs_title(),
            screenshot_hint: default_screenshot_hint(),
            body_font: Font::default(),
            hint_font: Font::hint(),
        }
    }
}

impl Appearance {
    /// Load the appearance from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the appearance file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load the appearance from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read appearance from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse appearance from {}", path.display()))
    }

    /// Save the appearance to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize appearance")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write appearance to {}", path.display()))?;
        Ok(())
    }

    /// Get the default appearance file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("feedback-form")
            .join("appearance.json")
    }
}
