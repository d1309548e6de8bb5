use crate::{commands::error::ArgsError, error::CliError, util::bold};
use devchain_config::{ConfigFile, Preset};
use std::path::{Path, PathBuf};
use tracing::info;

pub fn init(path: &Path, preset: Preset, force: bool) -> Result<(), CliError> {
    let backup = write_preset(path, preset, force)?;
    if let Some(backup) = backup {
        println!("previous config saved to {}", backup.display());
    }
    println!("wrote preset {} to {}", bold(preset.to_string()), path.display());
    Ok(())
}

fn write_preset(path: &Path, preset: Preset, force: bool) -> Result<Option<PathBuf>, CliError> {
    let file = ConfigFile::new(path)?;
    if file.exists() && !force {
        return Err(ArgsError::FileExists(path.to_path_buf()).into());
    }
    info!("writing preset {preset} as {}", file.format());
    Ok(file.store(&preset.config())?)
}
