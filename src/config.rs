use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::ExportFormat;
use crate::document::ExerciseTemplate;

/// Configuration for tmd
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Contents and naming of freshly created files
    pub new_file: NewFileConfig,
    /// Table shape for exercises added through the editor
    pub exercise: ExerciseConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewFileConfig {
    pub title: String,
    pub exercise_name: String,
    /// chrono format string for the file name, e.g. `%d.%m.%y` -> `18.10.26`
    pub date_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseConfig {
    pub header: Vec<String>,
    pub blank_rows: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub default_format: ExportFormat,
}

impl Default for NewFileConfig {
    fn default() -> Self {
        NewFileConfig {
            title: "Workout".to_string(),
            exercise_name: "New exercise".to_string(),
            date_format: "%d.%m.%y".to_string(),
        }
    }
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        let template = ExerciseTemplate::default();
        ExerciseConfig {
            header: template.header,
            blank_rows: template.blank_rows,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            default_format: ExportFormat::Tmd,
        }
    }
}

impl Config {
    /// Load config from config directory
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                let content = fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&content)?;
                tracing::debug!(path = %config_path.display(), "loaded config");
                return Ok(config);
            }
        }

        // Return default config if no file found
        Ok(Config::default())
    }

    /// Save config to config directory
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::get_config_path() {
            // Create config directory if it doesn't exist
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::write(&config_path, self.to_toml()?)?;
        }

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the path to the config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tmd").join("config.toml"))
    }

    /// Initialize default config file
    pub fn init_default() -> Result<()> {
        let config = Config::default();
        config.save()?;
        Ok(())
    }

    pub fn exercise_template(&self) -> ExerciseTemplate {
        ExerciseTemplate {
            header: self.exercise.header.clone(),
            blank_rows: self.exercise.blank_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [exercise]
            header = ["Weight", "Reps", "RPE"]
            "#,
        )
        .unwrap();

        assert_eq!(config.exercise.header.len(), 3);
        assert_eq!(config.exercise.blank_rows, 3);
        assert_eq!(config.new_file, NewFileConfig::default());
        assert_eq!(config.export.default_format, ExportFormat::Tmd);
    }

    #[test]
    fn test_config_toml_round_trip() {
        let mut config = Config::default();
        config.export.default_format = ExportFormat::Csv;
        config.new_file.title = "Leg Day".to_string();

        let text = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
