use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::data::DataSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    Dir { path: String },
    Remote { url: String },
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Dir {
            path: "data".to_string(),
        }
    }
}

impl SourceConfig {
    /// Interpret a GIGVIEW_DATA value: URLs become remote sources, anything
    /// else is taken as a local directory path.
    pub fn from_env_value(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            SourceConfig::Remote {
                url: value.to_string(),
            }
        } else {
            SourceConfig::Dir {
                path: value.to_string(),
            }
        }
    }

    pub fn to_source(&self) -> DataSource {
        match self {
            SourceConfig::Dir { path } => DataSource::Dir(PathBuf::from(path)),
            SourceConfig::Remote { url } => DataSource::Remote(url.clone()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
}

impl Config {
    pub fn new() -> Self {
        Self {
            source: SourceConfig::default(),
        }
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::new())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    fn get_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".config").join("gigview").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_distinguishes_urls_from_paths() {
        assert_eq!(
            SourceConfig::from_env_value("https://example.com/data"),
            SourceConfig::Remote {
                url: "https://example.com/data".to_string()
            }
        );
        assert_eq!(
            SourceConfig::from_env_value("  /srv/gigs  "),
            SourceConfig::Dir {
                path: "/srv/gigs".to_string()
            }
        );
    }

    #[test]
    fn source_config_maps_onto_data_source() {
        let dir = SourceConfig::Dir {
            path: "data".to_string(),
        };
        assert_eq!(dir.to_source(), DataSource::Dir(PathBuf::from("data")));

        let remote = SourceConfig::Remote {
            url: "http://localhost:8000".to_string(),
        };
        assert_eq!(
            remote.to_source(),
            DataSource::Remote("http://localhost:8000".to_string())
        );
    }

    #[test]
    fn stored_shape_stays_loadable() {
        let json = r#"{ "source": { "kind": "remote", "url": "https://example.com" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.source,
            SourceConfig::Remote {
                url: "https://example.com".to_string()
            }
        );
    }
}
