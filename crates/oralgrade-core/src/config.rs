//! Configuration for oralgrade (stored in ~/.config/oralgrade/config.toml)
//!
//! Only the metadata keys and the file extensions picked up when walking a
//! directory are configurable. The grading table is fixed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OralgradeError, Result};

const CONFIG_DIR: &str = "oralgrade";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "ORALGRADE_CONFIG_DIR";

/// Metadata key receiving the score string
pub const DEFAULT_SCORE_KEY: &str = "punkte";
/// Metadata key receiving the suggested grade
pub const DEFAULT_GRADE_KEY: &str = "vorgeschlageneNote";

/// Names of the two metadata fields written per document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataKeys {
    #[serde(default = "default_score_key")]
    pub score_key: String,
    #[serde(default = "default_grade_key")]
    pub grade_key: String,
}

impl Default for MetadataKeys {
    fn default() -> Self {
        Self {
            score_key: default_score_key(),
            grade_key: default_grade_key(),
        }
    }
}

fn default_score_key() -> String {
    DEFAULT_SCORE_KEY.to_string()
}

fn default_grade_key() -> String {
    DEFAULT_GRADE_KEY.to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingConfig {
    #[serde(default)]
    pub metadata: MetadataKeys,

    /// Extensions of files collected from directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            metadata: MetadataKeys::default(),
            extensions: default_extensions(),
        }
    }
}

impl GradingConfig {
    /// Location of the config file, honouring `ORALGRADE_CONFIG_DIR`
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    OralgradeError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the config from its default location, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("config file absent, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| OralgradeError::io_operation("read config", path.display(), e))?;

        let config: GradingConfig =
            toml::from_str(&content).map_err(|e| OralgradeError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |reason: &str| OralgradeError::InvalidConfig {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        if self.metadata.score_key.trim().is_empty() || self.metadata.grade_key.trim().is_empty()
        {
            return Err(invalid("metadata keys must not be empty"));
        }
        if self.metadata.score_key == self.metadata.grade_key {
            return Err(invalid("score_key and grade_key must differ"));
        }
        if self.extensions.is_empty() {
            return Err(invalid("at least one extension is required"));
        }
        Ok(())
    }

    /// Whether a file should be picked up when walking a directory
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }
}
