//! Configuration for import and export defaults

mod paths;

pub use paths::*;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::export::ExportFormat;
use crate::schema::FieldId;

/// Configuration for lyricbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the host keeps its catalog (None uses the platform data dir)
    pub catalog_path: Option<PathBuf>,
    /// Format for exports and templates
    pub export_format: ExportFormat,
    /// Prefix exports with a UTF-8 byte-order mark
    pub export_bom: bool,
    /// Fields exported when none are requested explicitly
    pub default_fields: Vec<FieldId>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            export_format: ExportFormat::Csv,
            export_bom: true,
            default_fields: FieldId::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Load config from disk, falling back to defaults if missing or unreadable
    pub fn load() -> Self {
        default_config_path()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let path = default_config_path()
            .ok_or_else(|| Error::Config("No config directory on this platform".to_string()))?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Catalog location: configured path, else the platform default
    pub fn resolved_catalog_path(&self) -> Option<PathBuf> {
        self.catalog_path.clone().or_else(default_catalog_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.export_format, ExportFormat::Csv);
        assert!(config.export_bom);
        assert_eq!(config.default_fields.len(), FieldId::ALL.len());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            catalog_path: Some(dir.path().join("catalog.json")),
            export_format: ExportFormat::Tsv,
            export_bom: false,
            default_fields: vec![FieldId::AlbumTitle, FieldId::SongTitle, FieldId::VocabWord],
        };
        config.save_to(&path).expect("Failed to save config");

        let loaded = Config::load_from(&path).expect("Failed to load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "export_format": "tsv" }"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.export_format, ExportFormat::Tsv);
        assert!(loaded.export_bom);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        assert!(Config::load_from(&dir.path().join("nope.json")).is_err());
    }
}
