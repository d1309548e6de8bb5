use crate::types::{
    AccountsConfig, CompilerSettings, DevChainConfig, MiningConfig, MochaConfig, NetworkConfig,
    OptimizerSettings, PathsConfig, SolidityConfig, SoliditySetting,
};
use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Chain id every preset assigns to the in-process `hardhat` network.
pub const DEV_CHAIN_ID: u64 = 1337;

/// Name of the in-process simulated network.
pub const IN_PROCESS_NETWORK: &str = "hardhat";

/// 10000 ETH in wei.
const TEN_THOUSAND_ETH: &str = "10000000000000000000000";
/// 1000 ETH in wei.
const ONE_THOUSAND_ETH: &str = "1000000000000000000000";
/// 100 ETH in wei.
const ONE_HUNDRED_ETH: &str = "100000000000000000000";

/// Named configuration presets, one per deployment target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Preset {
    /// In-process chain only, automine plus 1s interval mining.
    #[default]
    InProcess,
    /// Adds a standalone node on localhost:8545.
    Localhost,
    /// Optimizer enabled, long test timeout.
    Optimized,
    /// Targets a ganache instance on port 7545.
    Ganache,
}

impl Preset {
    pub fn all() -> Vec<Preset> {
        Preset::iter().collect()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::InProcess => "in-process chain, 10 accounts, automine + 1s interval",
            Preset::Localhost => "standalone node on 127.0.0.1:8545, 20 accounts, custom paths",
            Preset::Optimized => "optimizer enabled (200 runs), 120s test timeout",
            Preset::Ganache => "ganache on port 7545, 5 accounts, 40s test timeout",
        }
    }

    /// Builds the configuration record for this preset.
    pub fn config(&self) -> DevChainConfig {
        match self {
            Preset::InProcess => in_process(),
            Preset::Localhost => localhost(),
            Preset::Optimized => optimized(),
            Preset::Ganache => ganache(),
        }
    }
}

impl From<Preset> for DevChainConfig {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}

fn dev_network(accounts: u64, balance: &str, mining: MiningConfig) -> NetworkConfig {
    NetworkConfig {
        chain_id: Some(DEV_CHAIN_ID),
        mining: Some(mining),
        accounts: Some(AccountsConfig {
            count: Some(accounts),
            accounts_balance: Some(balance.to_owned()),
        }),
        ..Default::default()
    }
}

fn in_process() -> DevChainConfig {
    let mut networks = BTreeMap::new();
    networks.insert(
        IN_PROCESS_NETWORK.to_owned(),
        dev_network(
            10,
            TEN_THOUSAND_ETH,
            MiningConfig {
                auto: Some(true),
                interval: Some(1000),
            },
        ),
    );
    DevChainConfig {
        default_network: Some(IN_PROCESS_NETWORK.to_owned()),
        solidity: SoliditySetting::from("0.8.19"),
        networks,
        paths: None,
        mocha: None,
    }
}

fn localhost() -> DevChainConfig {
    let mut networks = BTreeMap::new();
    networks.insert(
        IN_PROCESS_NETWORK.to_owned(),
        dev_network(
            20,
            TEN_THOUSAND_ETH,
            MiningConfig {
                auto: Some(false),
                interval: Some(5000),
            },
        ),
    );
    networks.insert(
        "localhost".to_owned(),
        NetworkConfig {
            chain_id: Some(DEV_CHAIN_ID),
            host: Some("127.0.0.1".to_owned()),
            port: Some(8545),
            timeout: Some(60_000),
            ..Default::default()
        },
    );
    DevChainConfig {
        default_network: Some(IN_PROCESS_NETWORK.to_owned()),
        solidity: SoliditySetting::from("0.8.17"),
        networks,
        paths: Some(PathsConfig {
            root: None,
            sources: Some("contracts".to_owned()),
            tests: Some("test".to_owned()),
            cache: Some("cache".to_owned()),
            artifacts: Some("artifacts".to_owned()),
        }),
        mocha: Some(MochaConfig { timeout: 60_000 }),
    }
}

fn optimized() -> DevChainConfig {
    let mut networks = BTreeMap::new();
    networks.insert(
        IN_PROCESS_NETWORK.to_owned(),
        NetworkConfig {
            chain_id: Some(DEV_CHAIN_ID),
            ..Default::default()
        },
    );
    DevChainConfig {
        default_network: None,
        solidity: SoliditySetting::Detailed(SolidityConfig {
            version: "0.8.19".to_owned(),
            settings: Some(CompilerSettings {
                optimizer: Some(OptimizerSettings {
                    enabled: true,
                    runs: 200,
                }),
            }),
        }),
        networks,
        paths: Some(PathsConfig {
            sources: Some("contracts".to_owned()),
            tests: Some("test".to_owned()),
            ..Default::default()
        }),
        mocha: Some(MochaConfig { timeout: 120_000 }),
    }
}

fn ganache() -> DevChainConfig {
    let mut networks = BTreeMap::new();
    networks.insert(
        IN_PROCESS_NETWORK.to_owned(),
        dev_network(
            5,
            ONE_THOUSAND_ETH,
            MiningConfig {
                auto: None,
                interval: Some(3000),
            },
        ),
    );
    networks.insert(
        "ganache".to_owned(),
        NetworkConfig {
            chain_id: Some(DEV_CHAIN_ID),
            url: Some("http://127.0.0.1:7545".to_owned()),
            timeout: Some(20_000),
            accounts: Some(AccountsConfig {
                count: Some(5),
                accounts_balance: Some(ONE_HUNDRED_ETH.to_owned()),
            }),
            ..Default::default()
        },
    );
    DevChainConfig {
        default_network: Some("ganache".to_owned()),
        solidity: SoliditySetting::from("0.8.18"),
        networks,
        paths: Some(PathsConfig {
            root: None,
            sources: Some("src/contracts".to_owned()),
            tests: Some("src/test".to_owned()),
            cache: Some("build/cache".to_owned()),
            artifacts: Some("build/artifacts".to_owned()),
        }),
        mocha: Some(MochaConfig { timeout: 40_000 }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn names_round_trip_through_from_str() {
        for preset in Preset::iter() {
            let name = preset.to_string();
            assert_eq!(Preset::from_str(&name).unwrap(), preset);
        }
        assert_eq!(Preset::InProcess.to_string(), "in-process");
        assert!(Preset::from_str("mainnet").is_err());
    }

    #[test]
    fn every_preset_is_valid() {
        for preset in Preset::iter() {
            preset
                .config()
                .validate()
                .unwrap_or_else(|e| panic!("preset {preset} failed validation: {e}"));
        }
    }

    #[test]
    fn in_process_network_uses_dev_chain_id_everywhere() {
        for preset in Preset::iter() {
            let cfg = preset.config();
            let hardhat = cfg.network(IN_PROCESS_NETWORK).unwrap();
            assert_eq!(hardhat.chain_id, Some(DEV_CHAIN_ID), "preset {preset}");
        }
    }

    #[test]
    fn optimized_preset_values() {
        let cfg = Preset::Optimized.config();
        assert_eq!(cfg.solidity.version(), "0.8.19");
        let optimizer = cfg.solidity.optimizer().unwrap();
        assert!(optimizer.enabled);
        assert_eq!(optimizer.runs, 200);
        assert_eq!(cfg.mocha.unwrap().timeout, 120_000);
    }

    #[test]
    fn in_process_preset_values() {
        let cfg = Preset::default().config();
        assert_eq!(cfg.solidity, SoliditySetting::from("0.8.19"));
        let hardhat = cfg.network(IN_PROCESS_NETWORK).unwrap();
        let mining = hardhat.mining.unwrap();
        assert_eq!(mining.auto, Some(true));
        assert_eq!(mining.interval, Some(1000));
        let accounts = hardhat.accounts.as_ref().unwrap();
        assert_eq!(accounts.count, Some(10));
        assert_eq!(accounts.accounts_balance.as_deref(), Some(TEN_THOUSAND_ETH));
    }

    #[test]
    fn presets_are_distinct() {
        let all = Preset::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.config(), b.config(), "{a} and {b} are identical");
            }
        }
    }
}
