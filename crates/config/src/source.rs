use crate::{preset::Preset, types::DevChainConfig, Error, Result};
use std::{fmt, path::PathBuf, str::FromStr};
use tracing::debug;

const PRESET_PREFIX: &str = "preset:";

/// Where a config comes from.
/// `preset:<name>` selects a preset, `http(s)://...` a remote file, anything else a local path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    Preset(Preset),
    Remote(String),
    File(PathBuf),
}

impl FromStr for ConfigSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(name) = s.strip_prefix(PRESET_PREFIX) {
            let preset =
                Preset::from_str(name).map_err(|_| Error::UnknownPreset(name.to_owned()))?;
            return Ok(Self::Preset(preset));
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Self::Remote(s.to_owned()));
        }
        Ok(Self::File(PathBuf::from(s)))
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Preset(preset) => write!(f, "{PRESET_PREFIX}{preset}"),
            ConfigSource::Remote(url) => f.write_str(url),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl ConfigSource {
    pub async fn load(&self) -> Result<DevChainConfig> {
        debug!("loading config from {self}");
        match self {
            ConfigSource::Preset(preset) => Ok(preset.config()),
            ConfigSource::Remote(url) => DevChainConfig::from_remote_url(url).await,
            ConfigSource::File(path) => DevChainConfig::from_file(path),
        }
    }

    /// Loads and validates in one step; lint warnings are logged.
    pub async fn load_validated(&self) -> Result<DevChainConfig> {
        let config = self.load().await?;
        config.validate_and_lint()?;
        Ok(config)
    }
}
