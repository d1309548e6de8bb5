mod chains;
mod devchain_subcommand;
mod diff;
mod edit;
mod endpoints;
pub mod error;
mod init;
mod presets;
mod show;
mod validate;

use clap::Parser;

pub use chains::chains;
pub use devchain_subcommand::DevchainSubcommand;
pub use diff::diff;
pub use edit::{get, set, unset};
pub use endpoints::endpoints;
pub use init::init;
pub use presets::presets;
pub use show::show;
pub use validate::validate;

#[derive(Parser, Debug)]
#[command(name = "devchain", version, about = "Inspect, validate and edit development-chain configs")]
pub struct DevchainCli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: DevchainSubcommand,
}

impl DevchainCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
