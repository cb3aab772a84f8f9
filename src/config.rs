use crate::parser::assembler::check_default_duration;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Token-classification endpoint; the offline lexicon tagger is used when unset
    pub endpoint: Option<String>,
    /// Environment variable holding the bearer token
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Length given to events parsed without an end time
    pub default_duration_minutes: Option<i64>,
}

fn default_token_env() -> String {
    "HUGGINGFACE_API_TOKEN".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { endpoint: None, token_env: default_token_env(), timeout_secs: default_timeout_secs() }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self { default_duration_minutes: Some(60) }
    }
}

impl ClassifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Token from the configured environment variable, if set and non-empty
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env).ok().filter(|t| !t.trim().is_empty())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the parser cannot apply
    pub fn validate(&self) -> Result<()> {
        if let Some(minutes) = self.calendar.default_duration_minutes {
            check_default_duration(minutes).context("Invalid calendar.default_duration_minutes")?;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "kalendar", "kalendar")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.classifier.endpoint, None);
        assert_eq!(config.classifier.token_env, "HUGGINGFACE_API_TOKEN");
        assert_eq!(config.classifier.timeout(), Duration::from_secs(10));
        assert_eq!(config.calendar.default_duration_minutes, Some(60));
    }

    #[test]
    fn test_config_save_load() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.classifier.endpoint = Some("http://localhost:8080/classify".to_string());
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[classifier]\nendpoint = \"http://example.test\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.classifier.endpoint.as_deref(), Some("http://example.test"));
        assert_eq!(loaded.classifier.timeout_secs, 10);
        assert_eq!(loaded.calendar.default_duration_minutes, Some(60));

        Ok(())
    }

    #[test]
    fn test_out_of_range_default_duration_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        for minutes in ["-30", "0", "9223372036854775807"] {
            fs::write(&config_path, format!("[calendar]\ndefault_duration_minutes = {}\n", minutes))
                .unwrap();
            assert!(Config::load_from(&config_path).is_err(), "{} should be rejected", minutes);
        }
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "classifier = 5").unwrap();
        assert!(Config::load_from(&config_path).is_err());
    }
}
