//! CLI Configuration

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub default_format: Option<String>,
}

impl Config {
    pub fn load(profile: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::config_path(profile)?)
    }

    pub fn save(&self, profile: Option<&str>) -> Result<PathBuf> {
        let path = Self::config_path(profile)?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))
    }

    /// Set a key by name
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "endpoint" => self.endpoint = Some(value),
            "timeout_secs" => {
                let secs = value
                    .parse()
                    .map_err(|_| anyhow!("timeout_secs must be a whole number of seconds"))?;
                self.timeout_secs = Some(secs);
            }
            "default_format" => {
                if OutputFormat::parse(&value).is_none() {
                    return Err(anyhow!("default_format must be one of table, json, yaml"));
                }
                self.default_format = Some(value);
            }
            _ => return Err(anyhow!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// Get a key by name
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = match key {
            "endpoint" => self.endpoint.clone(),
            "timeout_secs" => self.timeout_secs.map(|s| s.to_string()),
            "default_format" => self.default_format.clone(),
            _ => return Err(anyhow!("Unknown config key: {}", key)),
        };
        Ok(value)
    }

    pub const KEYS: [&'static str; 3] = ["endpoint", "timeout_secs", "default_format"];

    fn config_path(profile: Option<&str>) -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Cannot find home directory"))?;
        let filename = match profile {
            Some(p) => format!("config.{}.toml", p),
            None => "config.toml".to_string(),
        };
        Ok(home.join(".bloom-pizza").join(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("endpoint", "http://pizza.test/api/order".into()).unwrap();
        config.set("timeout_secs", "10".into()).unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.get("timeout_secs").unwrap(), Some("10".into()));
    }

    #[test]
    fn test_unknown_key() {
        let mut config = Config::default();
        assert!(config.set("api_key", "x".into()).is_err());
        assert!(config.get("api_key").is_err());
        assert!(config.set("timeout_secs", "soon".into()).is_err());
    }

    #[test]
    fn test_default_format_checked() {
        let mut config = Config::default();
        assert!(config.set("default_format", "xml".into()).is_err());
        assert_eq!(config.default_format, None);

        config.set("default_format", "yaml".into()).unwrap();
        assert_eq!(config.get("default_format").unwrap(), Some("yaml".into()));
    }
}
