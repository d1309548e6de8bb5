use crate::util::bold;
use devchain_config::registry::KNOWN_CHAINS;

pub fn chains() {
    println!(
        "{}",
        bold(format!("{:>10}  {:<30} {:<8} {:<8} {}", "chain id", "name", "chain", "network", "currency"))
    );
    for chain in KNOWN_CHAINS {
        println!(
            "{:>10}  {:<30} {:<8} {:<8} {}",
            chain.chain_id, chain.name, chain.chain, chain.network, chain.currency.symbol
        );
    }
}
