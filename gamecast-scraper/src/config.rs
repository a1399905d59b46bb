use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ScrapeError;

/// TOML config file format.
///
/// ```toml
/// [youtube]
/// api_key = "..."
///
/// [convert]
/// window_size = 100
/// window_step = 50
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub youtube: Option<YouTubeConfig>,
    #[serde(default)]
    pub convert: Option<ConvertConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct YouTubeConfig {
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConvertConfig {
    #[serde(default)]
    pub window_size: Option<usize>,
    #[serde(default)]
    pub window_step: Option<usize>,
}

impl ConfigFile {
    pub fn youtube_api_key(&self) -> Option<&str> {
        self.youtube
            .as_ref()
            .and_then(|y| y.api_key.as_deref())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn window_size(&self) -> Option<usize> {
        self.convert.as_ref().and_then(|c| c.window_size)
    }

    pub fn window_step(&self) -> Option<usize> {
        self.convert.as_ref().and_then(|c| c.window_step)
    }
}

/// Return the path to the config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gamecast").join("config.toml"))
}

/// Read a config file. A missing file reads as an empty config.
pub fn read_config(path: &Path) -> Result<ConfigFile, ScrapeError> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScrapeError::config(format!("Invalid config file {}: {e}", path.display())))
}

/// Load the user's config file.
///
/// Problems with the file are logged and treated as an empty config, so a
/// broken file never blocks flags and environment variables.
pub fn load_config() -> ConfigFile {
    let Some(path) = config_path() else {
        return ConfigFile::default();
    };
    match read_config(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config file: {e}");
            ConfigFile::default()
        }
    }
}
