use crate::{
    error::CliError,
    util::{bold, green, yellow},
};
use devchain_config::{ConfigSource, DevChainConfig};
use tracing::info;

/// Fails with every schema violation; prints lint warnings and a network summary when the
/// config is valid.
pub async fn validate(source: &ConfigSource) -> Result<(), CliError> {
    let config = source.load().await?;
    config.validate()?;
    let warnings = config.lint();

    for warning in &warnings {
        println!("{} {warning}", yellow("warning:"));
    }
    info!(
        "{} networks, compiler {}",
        config.networks.len(),
        config.solidity.version()
    );
    for line in network_summary(&config) {
        println!("{line}");
    }
    println!("{} {source} is valid", green("ok:"));
    Ok(())
}

/// One line per network: chain id, funded accounts in ether, and whether it is the default.
fn network_summary(config: &DevChainConfig) -> Vec<String> {
    let default = config.selected_network().map(|(name, _)| name);
    config
        .networks
        .iter()
        .map(|(name, network)| {
            let mut parts = vec![];
            if let Some(chain_id) = network.chain_id {
                parts.push(format!("chain {chain_id}"));
            }
            if let Some(accounts) = &network.accounts {
                match (accounts.count, accounts.balance_display()) {
                    (Some(count), Some(balance)) => {
                        parts.push(format!("{count} accounts x {balance}"))
                    }
                    (Some(count), None) => parts.push(format!("{count} accounts")),
                    (None, Some(balance)) => parts.push(format!("accounts funded with {balance}")),
                    (None, None) => {}
                }
            }
            if default == Some(name.as_str()) {
                parts.push("default".to_owned());
            }
            format!("  {}: {}", bold(name), parts.join(", "))
        })
        .collect()
}
