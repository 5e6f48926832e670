use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::Level;

use crate::error::ConfigError;
use crate::holder::PRIME_BATCH;

/// An (original, reassigned) pair of indices used by one demo scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SceneIndices {
    pub original: usize,
    pub reassigned: usize,
}

/// Settings for the two demo scenes.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub batch_size: usize,
    pub shallow_scene: SceneIndices,
    pub deep_scene: SceneIndices,
    pub color: bool,
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            batch_size: PRIME_BATCH,
            shallow_scene: SceneIndices {
                original: 2,
                reassigned: 3,
            },
            deep_scene: SceneIndices {
                original: 4,
                reassigned: 5,
            },
            color: true,
            log_level: "info".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::invalid("batch_size", "must be at least 1"));
        }

        let scenes = [
            ("shallow_scene", self.shallow_scene),
            ("deep_scene", self.deep_scene),
        ];
        for (name, scene) in scenes {
            for (which, index) in [("original", scene.original), ("reassigned", scene.reassigned)] {
                if index >= self.batch_size {
                    return Err(ConfigError::invalid(
                        format!("{}.{}", name, which),
                        format!("index {} is beyond batch size {}", index, self.batch_size),
                    ));
                }
            }
        }

        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::invalid("log_level", format!("unknown level '{}'", self.log_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.batch_size, 50);
        assert_eq!(config.shallow_scene, SceneIndices { original: 2, reassigned: 3 });
        assert_eq!(config.deep_scene, SceneIndices { original: 4, reassigned: 5 });
        assert_eq!(config.level().unwrap(), Level::INFO);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = DemoConfig::from_toml_str(
            r#"
            color = false
            log_level = "debug"

            [deep_scene]
            original = 7
            reassigned = 9
            "#,
        )
        .unwrap();

        assert!(!config.color);
        assert_eq!(config.level().unwrap(), Level::DEBUG);
        assert_eq!(config.deep_scene, SceneIndices { original: 7, reassigned: 9 });
        assert_eq!(config.batch_size, PRIME_BATCH);
    }

    #[test]
    fn test_zero_batch_rejected() {
        let err = DemoConfig::from_toml_str("batch_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "batch_size"));
    }

    #[test]
    fn test_scene_index_beyond_batch_rejected() {
        let err = DemoConfig::from_toml_str(
            r#"
            batch_size = 4
            [shallow_scene]
            original = 2
            reassigned = 3
            "#,
        )
        .unwrap_err();
        match err {
            ConfigError::Invalid { field, reason } => {
                assert_eq!(field, "deep_scene.original");
                assert!(reason.contains("batch size 4"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let err = DemoConfig::from_toml_str(r#"log_level = "loud""#).unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = DemoConfig::from_toml_str("batch_size = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "batch_size = 20").unwrap();
        writeln!(file, "color = false").unwrap();

        let config = DemoConfig::load(file.path()).unwrap();
        assert_eq!(config.batch_size, 20);
        assert!(!config.color);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = DemoConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
