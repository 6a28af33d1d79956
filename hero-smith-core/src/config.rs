//! Tool configuration loaded from TOML.
//!
//! ```toml
//! [paths]
//! abilities = "data/abilities/abilities.json"
//! complications = "data/story/complications.json"
//! ```

use crate::error::{HeroSmithError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_ABILITIES_PATH: &str = "data/abilities/abilities.json";
pub const DEFAULT_COMPLICATIONS_PATH: &str = "data/story/complications.json";

/// Data file locations.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PathsConfig {
    pub abilities: Option<PathBuf>,
    pub complications: Option<PathBuf>,
}

/// Complete tool configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ToolsConfig {
    #[serde(default)]
    pub paths: PathsConfig,
}

impl ToolsConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HeroSmithError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config from {:?}: {}", path, e),
            ))
        })?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| HeroSmithError::Parse(format!("Failed to parse config TOML: {}", e)))
    }

    pub fn abilities_path(&self) -> PathBuf {
        self.paths
            .abilities
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ABILITIES_PATH))
    }

    pub fn complications_path(&self) -> PathBuf {
        self.paths
            .complications
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COMPLICATIONS_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_paths() {
        let toml = r#"
[paths]
abilities = "/srv/hero/abilities.json"
"#;

        let config = ToolsConfig::from_str(toml).unwrap();
        assert_eq!(config.abilities_path(), PathBuf::from("/srv/hero/abilities.json"));
        assert_eq!(
            config.complications_path(),
            PathBuf::from(DEFAULT_COMPLICATIONS_PATH)
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ToolsConfig::from_str("").unwrap();
        assert_eq!(config.abilities_path(), PathBuf::from(DEFAULT_ABILITIES_PATH));
    }

    #[test]
    fn test_invalid_config() {
        let result = ToolsConfig::from_str("[paths\nabilities = 3");
        assert!(matches!(result, Err(HeroSmithError::Parse(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ToolsConfig::from_file(&dir.path().join("tools.toml"));
        assert!(matches!(result, Err(HeroSmithError::Io(_))));
    }
}
