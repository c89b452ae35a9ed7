use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_base_url() -> String {
    "https://api.aladhan.com".to_string()
}
fn default_country() -> String {
    "Turkey".to_string()
}
fn default_method() -> u32 {
    13
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_max_age_secs() -> u64 {
    300
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_country")]
    pub country: String,
    /// Calculation method parameter passed through to the API verbatim.
    /// 13 = Diyanet İşleri Başkanlığı.
    #[serde(default = "default_method")]
    pub method: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            country: default_country(),
            method: default_method(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// A position fix younger than this is reused instead of re-querying.
    #[serde(default = "default_max_age_secs")]
    pub max_age_secs: u64,
    /// City used when no subcommand is given. Empty means unset.
    #[serde(default)]
    pub default_city: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_age_secs: default_max_age_secs(),
            default_city: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NotifyConfig {
    /// Keep the process alive until every scheduled notification has fired.
    #[serde(default)]
    pub wait_for_delivery: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "vakit").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.api.country, "Turkey");
        assert_eq!(config.api.method, 13);
        assert!(config.location.default_city.is_empty());
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[location]\ndefault_city = \"Istanbul\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.location.default_city, "Istanbul");
        assert_eq!(config.api.base_url, "https://api.aladhan.com");
        assert_eq!(config.location.timeout_secs, 15);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.location.default_city = "Ankara".to_string();
        config.notify.wait_for_delivery = true;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.location.default_city, "Ankara");
        assert!(loaded.notify.wait_for_delivery);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
