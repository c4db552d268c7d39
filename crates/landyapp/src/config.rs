//! # Configuration
//!
//! Landy configuration is managed by [`confique`], which handles layered
//! loading from TOML files, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `OPENAI_API_KEY`, `LANDY_MODEL`, etc.
//! 2. **Global Config**: `landy.toml` in the OS-appropriate config directory
//!    (via the `directories` crate).
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `api_url` | OpenAI chat completions endpoint | Where generation requests go |
//! | `model` | `gpt-4o` | Model name sent with every request |
//! | `api_key` | none | Bearer token; usually set via `OPENAI_API_KEY` |
//! | `request_timeout_secs` | `60` | Generation request timeout |
//! | `crawl_timeout_secs` | `10` | Per-fetch timeout when crawling competitors |
//! | `max_inner_pages` | `2` | Inner pages fetched beyond the competitor home page |
//! | `max_fetch_bytes` | `1048576` | Cap on bytes read from any crawled page |
//! | `data_dir` | OS data directory | Where page documents are stored |

use crate::error::{LandyError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o";
const CONFIG_FILENAME: &str = "landy.toml";

/// Configuration for landy, stored in `landy.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LandyConfig {
    /// Chat-completions endpoint generation requests are sent to.
    #[config(env = "LANDY_API_URL", default = "https://api.openai.com/v1/chat/completions")]
    pub api_url: String,

    /// Model name sent with every generation request.
    #[config(env = "LANDY_MODEL", default = "gpt-4o")]
    pub model: String,

    /// Bearer token for the generation endpoint. Usually provided via the
    /// `OPENAI_API_KEY` environment variable rather than the config file.
    #[config(env = "OPENAI_API_KEY")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Timeout for a single generation request, in seconds.
    #[config(default = 60)]
    pub request_timeout_secs: u64,

    /// Timeout for a single page fetch while crawling, in seconds.
    #[config(default = 10)]
    pub crawl_timeout_secs: u64,

    /// How many inner pages to fetch beyond the competitor home page.
    #[config(default = 2)]
    pub max_inner_pages: usize,

    /// Cap on bytes read from any single crawled page.
    #[config(default = 1_048_576)]
    pub max_fetch_bytes: u64,

    /// Where page documents are stored. Defaults to the OS data directory.
    #[config(env = "LANDY_DATA_DIR")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for LandyConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            request_timeout_secs: 60,
            crawl_timeout_secs: 10,
            max_inner_pages: 2,
            max_fetch_bytes: 1_048_576,
            data_dir: None,
        }
    }
}

impl LandyConfig {
    /// Load config from the environment and the global config file, falling
    /// back to compiled defaults for anything unset. A missing config file is
    /// not an error.
    pub fn load() -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = global_config_path() {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| LandyError::Config(e.to_string()))
    }

    /// Load config from a specific TOML file, still honoring environment
    /// overrides. The file must exist.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Err(LandyError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Self::builder()
            .env()
            .file(path)
            .load()
            .map_err(|e| LandyError::Config(e.to_string()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn crawl_timeout(&self) -> Duration {
        Duration::from_secs(self.crawl_timeout_secs)
    }

    /// Resolve the data directory, falling back to the OS data directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| LandyError::Config("Could not determine a data directory".to_string()))
    }

    /// The API key, or an error telling the user how to provide one.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            LandyError::Config(
                "No API key configured. Set OPENAI_API_KEY or add api_key to landy.toml"
                    .to_string(),
            )
        })
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "landy-app", "landy")
}

fn global_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = LandyConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.api_key, None);
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.crawl_timeout_secs, 10);
        assert_eq!(config.max_inner_pages, 2);
        assert_eq!(config.max_fetch_bytes, 1_048_576);
    }

    #[test]
    fn test_timeouts_as_durations() {
        let config = LandyConfig {
            request_timeout_secs: 5,
            crawl_timeout_secs: 2,
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.crawl_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_data_dir_override() {
        let config = LandyConfig {
            data_dir: Some(PathBuf::from("/tmp/landy-pages")),
            ..Default::default()
        };
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/landy-pages"));
    }

    #[test]
    fn test_api_key_missing_is_error() {
        let config = LandyConfig::default();
        let err = config.api_key().unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_api_key_present() {
        let config = LandyConfig {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        assert_eq!(config.api_key().unwrap(), "sk-test");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("landy.toml");
        fs::write(
            &path,
            "model = \"gpt-4o-mini\"\ncrawl_timeout_secs = 3\n",
        )
        .unwrap();

        let config = LandyConfig::load_from(&path).unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.crawl_timeout_secs, 3);
        // Everything unset falls back to defaults
        assert_eq!(config.request_timeout_secs, 60);
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = LandyConfig::load_from(&dir.path().join("nope.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = LandyConfig {
            model: "gpt-4o-mini".to_string(),
            max_inner_pages: 4,
            ..Default::default()
        };

        let toml = toml::to_string(&config).unwrap();
        let parsed: LandyConfig = toml::from_str(&toml).unwrap();

        assert_eq!(config, parsed);
    }
}
