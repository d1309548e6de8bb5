use crate::{error::CliError, util::bold};
use devchain_config::{registry, template::env_vars, ConfigSource};

pub async fn endpoints(source: &ConfigSource) -> Result<(), CliError> {
    let config = source.load_validated().await?;
    let resolved = config.resolve_endpoints(&env_vars())?;

    if resolved.is_empty() {
        println!("no networks with a connection target in {source}");
        return Ok(());
    }
    for (name, endpoint) in resolved {
        let chain = config
            .network(&name)
            .and_then(|n| n.chain_id)
            .map(|id| match registry::by_id(id) {
                Some(known) => format!(" (chain {id}, {})", known.name),
                None => format!(" (chain {id})"),
            })
            .unwrap_or_default();
        println!("{}: {endpoint}{chain}", bold(name));
    }
    Ok(())
}
