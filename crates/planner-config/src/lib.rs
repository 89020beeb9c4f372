use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// User configuration for planner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_export_path(),
        }
    }
}

fn default_title() -> String {
    planner_core::DEFAULT_TITLE.to_string()
}

fn default_export_path() -> PathBuf {
    PathBuf::from("schedule.txt")
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Config::default();
            config
                .save_to(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            debug!(path = %path.display(), "Wrote default config");
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "planner", "planner") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.planner/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.schedule.title, "My Schedule");
        assert_eq!(config.export.path, PathBuf::from("schedule.txt"));
        assert!(config.catalog.path.is_none());
        assert_eq!(config.display.format, OutputFormat::Table);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.schedule.title, config.schedule.title);
        assert_eq!(parsed.export.path, config.export.path);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[catalog]
path = "courses/course_records.txt"

[display]
format = "json"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.catalog.path,
            Some(PathBuf::from("courses/course_records.txt"))
        );
        assert_eq!(config.display.format, OutputFormat::Json);
        assert_eq!(config.schedule.title, "My Schedule");
    }

    #[test]
    fn test_save_and_load_from() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.schedule.title = "Spring".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.schedule.title, "Spring");
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nformat = \"xml\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
