use crate::{commands::error::ArgsError, error::CliError};
use devchain_config::{ConfigFile, ConfigSource};
use serde_json::Value;
use std::path::Path;
use tracing::info;

pub async fn get(source: &ConfigSource, key: &str) -> Result<(), CliError> {
    let config = source.load().await?;
    let value = config
        .get(key)?
        .ok_or_else(|| ArgsError::KeyNotSet(key.to_owned()))?;
    println!("{}", render_value(&value)?);
    Ok(())
}

pub fn set(file: &Path, key: &str, raw: &str) -> Result<(), CliError> {
    let file = ConfigFile::new(file)?;
    let mut config = file.load()?;
    config.set(key, raw)?;
    config.validate()?;
    file.store(&config)?;
    info!("set {key} in {}", file.path().display());
    Ok(())
}

pub fn unset(file: &Path, key: &str) -> Result<(), CliError> {
    let file = ConfigFile::new(file)?;
    let mut config = file.load()?;
    config.unset(key)?;
    config.validate()?;
    file.store(&config)?;
    info!("removed {key} from {}", file.path().display());
    Ok(())
}

/// Strings print bare, everything else as pretty JSON.
fn render_value(value: &Value) -> Result<String, CliError> {
    Ok(match value {
        Value::String(s) => s.to_owned(),
        other => serde_json::to_string_pretty(other)?,
    })
}
