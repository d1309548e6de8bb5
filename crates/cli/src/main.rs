mod commands;
mod error;
mod util;

use commands::{DevchainCli, DevchainSubcommand};
use error::CliError;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let args = DevchainCli::parse_args();
    util::init_tracing(args.verbose);
    run(args.command).await?;
    Ok(())
}

async fn run(command: DevchainSubcommand) -> Result<(), CliError> {
    match command {
        DevchainSubcommand::Presets => commands::presets(),

        DevchainSubcommand::Show { source, format } => commands::show(&source, format).await?,

        DevchainSubcommand::Validate { source } => commands::validate(&source).await?,

        DevchainSubcommand::Init {
            path,
            preset,
            force,
        } => commands::init(&path, preset, force)?,

        DevchainSubcommand::Get { source, key } => commands::get(&source, &key).await?,

        DevchainSubcommand::Set { file, key, value } => commands::set(&file, &key, &value)?,

        DevchainSubcommand::Unset { file, key } => commands::unset(&file, &key)?,

        DevchainSubcommand::Diff { from, to } => commands::diff(&from, &to).await?,

        DevchainSubcommand::Chains => commands::chains(),

        DevchainSubcommand::Endpoints { source } => commands::endpoints(&source).await?,
    }
    Ok(())
}
