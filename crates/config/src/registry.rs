//! Well-known EVM chains, used to label networks and flag chain id collisions.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Currency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnownChain {
    pub chain_id: u64,
    /// Display name, e.g. "Ethereum Mainnet".
    pub name: &'static str,
    /// Chain family, e.g. "ETH".
    pub chain: &'static str,
    /// Network within the family, e.g. "mainnet". Unique per family.
    pub network: &'static str,
    pub currency: Currency,
    /// Development chain that only exists on a local machine.
    pub local: bool,
}

impl KnownChain {
    pub fn is_local(&self) -> bool {
        self.local
    }
}

const ETHER: Currency = Currency {
    name: "Ether",
    symbol: "ETH",
    decimals: 18,
};

pub const KNOWN_CHAINS: &[KnownChain] = &[
    KnownChain {
        chain_id: 1,
        name: "Ethereum Mainnet",
        chain: "ETH",
        network: "mainnet",
        currency: ETHER,
        local: false,
    },
    KnownChain {
        chain_id: 11155111,
        name: "Ethereum Testnet Sepolia",
        chain: "ETH",
        network: "sepolia",
        currency: Currency {
            name: "Sepolia Ether",
            symbol: "SEP",
            decimals: 18,
        },
        local: false,
    },
    KnownChain {
        chain_id: 17000,
        name: "Ethereum Testnet Holesky",
        chain: "ETH",
        network: "holesky",
        currency: Currency {
            name: "Holesky Ether",
            symbol: "HOL",
            decimals: 18,
        },
        local: false,
    },
    KnownChain {
        chain_id: 137,
        name: "Polygon Mainnet",
        chain: "Polygon",
        network: "mainnet",
        currency: Currency {
            name: "POL",
            symbol: "POL",
            decimals: 18,
        },
        local: false,
    },
    KnownChain {
        chain_id: 80002,
        name: "Polygon Testnet Amoy",
        chain: "Polygon",
        network: "amoy",
        currency: Currency {
            name: "POL",
            symbol: "POL",
            decimals: 18,
        },
        local: false,
    },
    KnownChain {
        chain_id: 1337,
        name: "Local Development Chain",
        chain: "ETH",
        network: "devnet",
        currency: ETHER,
        local: true,
    },
    KnownChain {
        chain_id: 31337,
        name: "Hardhat/Anvil Default Chain",
        chain: "ETH",
        network: "hardhat",
        currency: ETHER,
        local: true,
    },
];

pub fn by_id(chain_id: u64) -> Option<&'static KnownChain> {
    KNOWN_CHAINS.iter().find(|c| c.chain_id == chain_id)
}

/// Case-insensitive lookup by chain family and network.
pub fn by_name(chain: &str, network: &str) -> Option<&'static KnownChain> {
    KNOWN_CHAINS
        .iter()
        .find(|c| c.chain.eq_ignore_ascii_case(chain) && c.network.eq_ignore_ascii_case(network))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn chain_ids_are_unique() {
        let ids: HashSet<u64> = KNOWN_CHAINS.iter().map(|c| c.chain_id).collect();
        assert_eq!(ids.len(), KNOWN_CHAINS.len());
    }

    #[test]
    fn chain_and_network_pairs_are_unique() {
        let pairs: HashSet<(String, String)> = KNOWN_CHAINS
            .iter()
            .map(|c| (c.chain.to_ascii_lowercase(), c.network.to_ascii_lowercase()))
            .collect();
        assert_eq!(pairs.len(), KNOWN_CHAINS.len());
    }

    #[test]
    fn looks_up_by_id_and_name() {
        assert_eq!(by_id(1).unwrap().name, "Ethereum Mainnet");
        assert!(by_id(1337).unwrap().is_local());
        assert!(!by_id(137).unwrap().is_local());
        assert!(by_id(424242).is_none());

        assert_eq!(by_name("eth", "Sepolia").unwrap().chain_id, 11155111);
        assert_eq!(by_name("Polygon", "mainnet").unwrap().chain_id, 137);
        assert!(by_name("ETH", "ropsten").is_none());

        assert_eq!(by_name("ETH", "devnet").unwrap().chain_id, 1337);
        assert_eq!(by_name("eth", "hardhat").unwrap().chain_id, 31337);
        assert!(by_name("ETH", "local").is_none());
    }
}
