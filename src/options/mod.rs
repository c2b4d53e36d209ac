//! Intake rules, viewer placement and UI text, with TOML support.
//!
//! Every section uses `#[serde(default)]` so a partial file (for example only
//! overriding `[viewer]`) works. The web app embeds `assets/pdfdrop.toml`.

mod intake;
mod labels;
mod viewer;

use std::path::Path;

pub use intake::{IntakeOptions, PDF_MEDIA_TYPE};
pub use labels::LabelOptions;
use serde::{Deserialize, Serialize};
pub use viewer::ViewerOptions;

use crate::error::OptionsError;

const BUNDLED: &str = include_str!("../../assets/pdfdrop.toml");

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Options {
    /// File validation rules.
    pub intake: IntakeOptions,
    /// External viewer widget placement.
    pub viewer: ViewerOptions,
    /// User-facing text.
    pub labels: LabelOptions,
}

impl Options {
    /// Options shipped in `assets/pdfdrop.toml`, or the defaults if that
    /// file does not parse.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_toml_str(BUNDLED).unwrap_or_else(|e| {
            log::error!("bundled options are invalid, using defaults: {e}");
            Self::default()
        })
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`OptionsError::Parse`] on malformed TOML or mistyped values.
    pub fn from_toml_str(content: &str) -> Result<Self, OptionsError> {
        toml::from_str(content).map_err(|e| OptionsError::Parse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`OptionsError::Io`] when the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to pretty-printed TOML.
    ///
    /// # Errors
    ///
    /// [`OptionsError::Parse`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, OptionsError> {
        toml::to_string_pretty(self)
            .map_err(|e| OptionsError::Parse(e.to_string()))
    }
}
