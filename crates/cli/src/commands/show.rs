use crate::error::CliError;
use devchain_config::{ConfigFormat, ConfigSource};

pub async fn show(source: &ConfigSource, format: ConfigFormat) -> Result<(), CliError> {
    let config = source.load().await?;
    print!("{}", config.encode(format)?);
    Ok(())
}
