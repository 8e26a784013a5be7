//! Configuration structures for document discovery and export.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CamposError, Result};

/// Main configuration for campos.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CamposConfig {
    /// Batch discovery configuration.
    pub batch: BatchConfig,

    /// Spreadsheet export configuration.
    pub export: ExportConfig,
}

/// How input folders are searched for documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Include subfolders when a folder is given as input.
    pub recursive: bool,

    /// File extension searched for inside folders (without the dot).
    pub extension: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            recursive: true,
            extension: "docx".to_string(),
        }
    }
}

/// Output file defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Suggested output name for batch runs.
    pub batch_file_name: String,

    /// Suggested output name for single-document runs.
    pub single_file_name: String,

    /// Render the header row in bold (xlsx only).
    pub bold_header: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            batch_file_name: "dados_lote.xlsx".to_string(),
            single_file_name: "dados.xlsx".to_string(),
            bold_header: true,
        }
    }
}

impl CamposConfig {
    /// Load configuration from a JSON file. Missing sections and keys take
    /// their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CamposError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CamposError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"batch": {"recursive": false}}"#).unwrap();

        let config = CamposConfig::from_file(&path).unwrap();
        assert!(!config.batch.recursive);
        assert_eq!(config.batch.extension, "docx");
        assert_eq!(config.export.batch_file_name, "dados_lote.xlsx");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = CamposConfig::default();
        config.export.single_file_name = "saida.csv".to_string();
        config.save(&path).unwrap();

        let loaded = CamposConfig::from_file(&path).unwrap();
        assert_eq!(loaded.export.single_file_name, "saida.csv");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = CamposConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CamposError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CamposConfig::from_file(&dir.path().join("none.json")).unwrap_err();
        assert!(matches!(err, CamposError::Io(_)));
    }
}
