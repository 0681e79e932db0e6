//! Configuration for Sprintgate.
//!
//! Loads an optional TOML file from `~/.sprintgate/config.toml` (overridable
//! via `SPRINTGATE_CONFIG`). Every field has an embedded default so the gate
//! runs with no file present.
//!
//! The credential allowlist is injected static configuration: plaintext
//! identifier and passcodes with no hashing and no rate limiting. Suitable
//! for a promotional gate only, not a recommended pattern.

use std::path::PathBuf;
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

use sprintgate_types::UiOptions;

/// Registration page opened on successful login.
pub const DEFAULT_CONTEST_URL: &str =
    "https://www.hackerearth.com/challenges/college/code-sprint-30/";

const DEFAULT_IDENTIFIER: &str = "Shivam_07";
const DEFAULT_PASSCODES: [&str; 5] = ["281234", "981536", "631732", "581294", "687891"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GateConfig {
    pub contest: Option<ContestConfig>,
    pub allowlist: Option<AllowlistConfig>,
    pub ui: Option<UiConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContestConfig {
    /// Overrides the registration URL opened on successful login.
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AllowlistConfig {
    pub identifier: Option<String>,
    pub passcodes: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable animations and motion effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

impl GateConfig {
    /// Path to the config file: `SPRINTGATE_CONFIG` if set, otherwise
    /// `~/.sprintgate/config.toml`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        if let Ok(path) = env::var("SPRINTGATE_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".sprintgate").join("config.toml"))
    }

    /// Load the config file if one exists. `Ok(None)` when absent.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Registration URL, falling back to the embedded contest page.
    #[must_use]
    pub fn contest_url(&self) -> String {
        self.contest
            .as_ref()
            .and_then(|contest| contest.url.clone())
            .unwrap_or_else(|| DEFAULT_CONTEST_URL.to_string())
    }

    /// Resolved credential allowlist, falling back to the embedded pairs.
    #[must_use]
    pub fn allowlist(&self) -> Allowlist {
        let identifier = self
            .allowlist
            .as_ref()
            .and_then(|section| section.identifier.clone())
            .unwrap_or_else(|| DEFAULT_IDENTIFIER.to_string());
        let passcodes = self
            .allowlist
            .as_ref()
            .and_then(|section| section.passcodes.clone())
            .unwrap_or_else(|| DEFAULT_PASSCODES.iter().map(ToString::to_string).collect());
        Allowlist {
            identifier,
            passcodes,
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let ui = self.ui.as_ref();
        UiOptions {
            ascii_only: ui.is_some_and(|ui| ui.ascii_only),
            high_contrast: ui.is_some_and(|ui| ui.high_contrast),
            reduced_motion: ui.is_some_and(|ui| ui.reduced_motion),
        }
    }
}

/// The fixed set of valid identifier/passcode combinations.
///
/// Immutable after startup. One identifier, any of the listed passcodes.
#[derive(Debug, Clone)]
pub struct Allowlist {
    identifier: String,
    passcodes: Vec<String>,
}

impl Allowlist {
    #[must_use]
    pub fn new(identifier: String, passcodes: Vec<String>) -> Self {
        Self {
            identifier,
            passcodes,
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn passcodes(&self) -> &[String] {
        &self.passcodes
    }
}

impl Default for Allowlist {
    fn default() -> Self {
        GateConfig::default().allowlist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = GateConfig::default();
        assert_eq!(config.contest_url(), DEFAULT_CONTEST_URL);
        let allowlist = config.allowlist();
        assert_eq!(allowlist.identifier(), "Shivam_07");
        assert_eq!(allowlist.passcodes().len(), 5);
        assert!(!config.ui_options().reduced_motion);
    }

    #[test]
    fn parses_full_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[contest]
url = "https://example.test/arena"

[allowlist]
identifier = "Ada_01"
passcodes = ["000000"]

[ui]
ascii_only = true
reduced_motion = true
"#,
        )
        .expect("write config");

        let config = GateConfig::load_from(path).expect("parse config");
        assert_eq!(config.contest_url(), "https://example.test/arena");
        let allowlist = config.allowlist();
        assert_eq!(allowlist.identifier(), "Ada_01");
        assert_eq!(allowlist.passcodes(), ["000000".to_string()]);
        let ui = config.ui_options();
        assert!(ui.ascii_only);
        assert!(ui.reduced_motion);
        assert!(!ui.high_contrast);
    }

    #[test]
    fn partial_file_keeps_embedded_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\nhigh_contrast = true\n").expect("write config");

        let config = GateConfig::load_from(path).expect("parse config");
        assert_eq!(config.contest_url(), DEFAULT_CONTEST_URL);
        assert_eq!(config.allowlist().identifier(), "Shivam_07");
        assert!(config.ui_options().high_contrast);
    }

    #[test]
    fn parse_error_carries_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = [valid").expect("write config");

        let err = GateConfig::load_from(path.clone()).expect_err("parse should fail");
        assert_eq!(err.path(), &path);
    }
}
