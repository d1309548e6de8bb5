use crate::{preset::Preset, types::DevChainConfig, Error, Result};
use chrono::Local;
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::{debug, info};

/// On-disk encodings for config files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from a file extension (`.toml`, `.json`, `.yaml` or `.yml`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_name)
            .ok_or_else(|| Error::UnknownFormat(path.display().to_string()))
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl DevChainConfig {
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_str_as(contents: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Toml => Self::from_toml_str(contents),
            ConfigFormat::Json => Self::from_json_str(contents),
            ConfigFormat::Yaml => Self::from_yaml_str(contents),
        }
    }

    /// Reads a config file; the format follows the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded {} bytes of {format} from {}", contents.len(), path.display());
        Self::from_str_as(&contents, format)
    }

    /// Fetches a config over HTTP. The format follows the URL path extension, TOML otherwise.
    pub async fn from_remote_url(url: &str) -> Result<Self> {
        let parsed = url::Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
        let format = ConfigFormat::from_path(parsed.path()).unwrap_or_default();
        let response = reqwest::get(parsed).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::RemoteStatus {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }
        let contents = response.text().await?;
        debug!("fetched {} bytes of {format} from {url}", contents.len());
        Self::from_str_as(&contents, format)
    }

    pub fn encode(&self, format: ConfigFormat) -> Result<String> {
        let encoded = match format {
            ConfigFormat::Toml => toml::to_string(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)? + "\n",
            ConfigFormat::Yaml => serde_yaml::to_string(self)?,
        };
        Ok(encoded)
    }

    /// Writes the config without backing up an existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let encoded = self.encode(ConfigFormat::from_path(path)?)?;
        std::fs::write(path, encoded)?;
        Ok(())
    }
}

/// A config file on disk that keeps a backup of its previous contents on every store.
#[derive(Clone, Debug)]
pub struct ConfigFile {
    path: PathBuf,
    format: ConfigFormat,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = ConfigFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the file if it exists; otherwise writes `preset` to it and returns that.
    pub fn open_or_init(path: impl Into<PathBuf>, preset: Preset) -> Result<(Self, DevChainConfig)> {
        let file = Self::new(path)?;
        if file.exists() {
            let config = file.load()?;
            return Ok((file, config));
        }
        let config = preset.config();
        file.store(&config)?;
        info!("created {} from preset '{preset}'", file.path.display());
        Ok((file, config))
    }

    pub fn load(&self) -> Result<DevChainConfig> {
        DevChainConfig::from_file(&self.path)
    }

    /// Writes `config`, copying any existing file to a backup first.
    /// Returns the backup path, if a backup was made.
    ///
    /// The new contents go to a temporary sibling that is renamed over the file, so a
    /// failed store leaves the existing file in place.
    pub fn store(&self, config: &DevChainConfig) -> Result<Option<PathBuf>> {
        let encoded = config.encode(self.format)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let staged = self.staging_path();
        std::fs::write(&staged, encoded)?;

        let backup = if self.exists() {
            let backup = self.backup_path();
            if let Err(e) = std::fs::copy(&self.path, &backup) {
                let _ = std::fs::remove_file(&staged);
                return Err(e.into());
            }
            info!("backed up {} to {}", self.path.display(), backup.display());
            Some(backup)
        } else {
            None
        };

        if let Err(e) = std::fs::rename(&staged, &self.path) {
            let _ = std::fs::remove_file(&staged);
            return Err(e.into());
        }
        info!("saved config to {}", self.path.display());
        Ok(backup)
    }

    /// `.<name>.tmp`, next to the file.
    fn staging_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path.with_file_name(format!(".{name}.tmp"))
    }

    /// `<stem>_<YYYYmmdd-HHMMSS>.<ext>.bak`, next to the file. A counter is appended
    /// when a backup with the same timestamp already exists.
    fn backup_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let ext = self.format.extension();

        let mut candidate = self.path.with_file_name(format!("{stem}_{stamp}.{ext}.bak"));
        let mut n = 1;
        while candidate.exists() {
            candidate = self
                .path
                .with_file_name(format!("{stem}_{stamp}-{n}.{ext}.bak"));
            n += 1;
        }
        candidate
    }
}

impl FromStr for ConfigFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownFormat(s.to_owned()))
    }
}
