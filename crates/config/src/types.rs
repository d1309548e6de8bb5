use crate::error::BalanceError;
use alloy::primitives::{utils::format_ether, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration record for a development chain and the tooling around it.
/// Defines the TOML/JSON/YAML schema for config files.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DevChainConfig {
    /// Network used when a command does not name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_network: Option<String>,

    /// Smart-contract compiler version, optionally with optimizer settings.
    pub solidity: SoliditySetting,

    /// Named chain endpoints.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub networks: BTreeMap<String, NetworkConfig>,

    /// Where sources, tests, cache and build artifacts live.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathsConfig>,

    /// Test runner settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mocha: Option<MochaConfig>,
}

/// The `solidity` key accepts a bare version string or a detailed table.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SoliditySetting {
    Version(String),
    Detailed(SolidityConfig),
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SolidityConfig {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<CompilerSettings>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct CompilerSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimizer: Option<OptimizerSettings>,
}

/// Compiler optimization policy. `runs` trades code size for execution cost.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u32,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: 200,
        }
    }
}

impl SoliditySetting {
    /// Compiler version, regardless of which form the setting was written in.
    pub fn version(&self) -> &str {
        match self {
            SoliditySetting::Version(version) => version,
            SoliditySetting::Detailed(cfg) => &cfg.version,
        }
    }

    pub fn optimizer(&self) -> Option<&OptimizerSettings> {
        match self {
            SoliditySetting::Version(_) => None,
            SoliditySetting::Detailed(cfg) => cfg
                .settings
                .as_ref()
                .and_then(|settings| settings.optimizer.as_ref()),
        }
    }
}

impl From<&str> for SoliditySetting {
    fn from(version: &str) -> Self {
        SoliditySetting::Version(version.to_owned())
    }
}

/// A simulated or remote chain endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Full connection URL; takes precedence over `host`/`port`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Request timeout in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mining: Option<MiningConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<AccountsConfig>,
}

impl NetworkConfig {
    /// Connection target: `url` if set, otherwise `http://{host}:{port}`.
    pub fn endpoint(&self) -> Option<String> {
        if let Some(url) = &self.url {
            return Some(url.to_owned());
        }
        match (&self.host, self.port) {
            (Some(host), Some(port)) => Some(format!("http://{host}:{port}")),
            _ => None,
        }
    }
}

/// Block production cadence of a local simulated chain.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct MiningConfig {
    /// Mine a block for every transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,

    /// Interval mining period in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u64>,
}

/// Test account provisioning.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    /// Initial balance per account, as a decimal string in wei.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts_balance: Option<String>,
}

impl AccountsConfig {
    /// Parses `accountsBalance`. Returns `None` when unset; `Some(Err)` when malformed.
    /// Only plain ASCII digits are accepted: no sign, separators or whitespace.
    pub fn balance(&self) -> Option<Result<U256, BalanceError>> {
        self.accounts_balance.as_deref().map(parse_wei)
    }

    /// Human readable balance, e.g. `10000.000000000000000000 ETH`.
    pub fn balance_display(&self) -> Option<String> {
        match self.balance()? {
            Ok(wei) => Some(format!("{} ETH", format_ether(wei))),
            Err(_) => self.accounts_balance.clone(),
        }
    }
}

fn parse_wei(raw: &str) -> Result<U256, BalanceError> {
    if raw.is_empty() {
        return Err(BalanceError::Empty);
    }
    if let Some(c) = raw.chars().find(|c| !c.is_ascii_digit()) {
        return Err(BalanceError::InvalidDigit(c));
    }
    U256::from_str_radix(raw, 10).map_err(|_| BalanceError::Overflow)
}

/// Path overrides, keyed by role.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct PathsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<String>,
}

impl PathsConfig {
    /// All configured `(role, path)` pairs.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("root", &self.root),
            ("sources", &self.sources),
            ("tests", &self.tests),
            ("cache", &self.cache),
            ("artifacts", &self.artifacts),
        ]
        .into_iter()
        .filter_map(|(role, path)| path.as_deref().map(|p| (role, p)))
        .collect()
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MochaConfig {
    /// Per-test timeout in milliseconds.
    pub timeout: u64,
}

impl DevChainConfig {
    /// A record with only a compiler version set.
    pub fn new(solidity: impl Into<SoliditySetting>) -> Self {
        Self {
            default_network: None,
            solidity: solidity.into(),
            networks: BTreeMap::new(),
            paths: None,
            mocha: None,
        }
    }

    pub fn network(&self, name: &str) -> Option<&NetworkConfig> {
        self.networks.get(name)
    }

    /// The network named by `defaultNetwork`, if it is defined.
    pub fn selected_network(&self) -> Option<(&str, &NetworkConfig)> {
        let name = self.default_network.as_deref()?;
        self.networks.get_key_value(name).map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_and_detailed_solidity_resolve_version() {
        let bare = SoliditySetting::from("0.8.19");
        assert_eq!(bare.version(), "0.8.19");
        assert!(bare.optimizer().is_none());

        let detailed = SoliditySetting::Detailed(SolidityConfig {
            version: "0.8.20".to_owned(),
            settings: Some(CompilerSettings {
                optimizer: Some(OptimizerSettings {
                    enabled: true,
                    runs: 1000,
                }),
            }),
        });
        assert_eq!(detailed.version(), "0.8.20");
        assert_eq!(detailed.optimizer().unwrap().runs, 1000);
    }

    #[test]
    fn parses_camel_case_keys() {
        let cfg: DevChainConfig = toml::from_str(
            r#"
            solidity = "0.8.19"
            defaultNetwork = "hardhat"

            [networks.hardhat]
            chainId = 1337

            [networks.hardhat.accounts]
            count = 10
            accountsBalance = "10000000000000000000000"
            "#,
        )
        .unwrap();
        let hardhat = cfg.network("hardhat").unwrap();
        assert_eq!(hardhat.chain_id, Some(1337));
        let accounts = hardhat.accounts.as_ref().unwrap();
        assert_eq!(accounts.count, Some(10));
        assert_eq!(
            accounts.balance().unwrap().unwrap(),
            U256::from(10_000u64) * U256::from(10u64).pow(U256::from(18u64))
        );
        assert_eq!(cfg.selected_network().unwrap().0, "hardhat");
    }

    #[test]
    fn endpoint_prefers_url_over_host_and_port() {
        let mut net = NetworkConfig {
            host: Some("127.0.0.1".to_owned()),
            port: Some(8545),
            ..Default::default()
        };
        assert_eq!(net.endpoint().unwrap(), "http://127.0.0.1:8545");
        net.url = Some("http://example.com:7545".to_owned());
        assert_eq!(net.endpoint().unwrap(), "http://example.com:7545");
        net.url = None;
        net.port = None;
        assert!(net.endpoint().is_none());
    }

    #[test]
    fn balance_display_formats_ether() {
        let accounts = AccountsConfig {
            count: None,
            accounts_balance: Some("1500000000000000000".to_owned()),
        };
        assert_eq!(accounts.balance_display().unwrap(), "1.500000000000000000 ETH");

        let bad = AccountsConfig {
            count: None,
            accounts_balance: Some("-1".to_owned()),
        };
        assert_eq!(bad.balance().unwrap(), Err(BalanceError::InvalidDigit('-')));
        assert_eq!(bad.balance_display().unwrap(), "-1");
    }

    #[test]
    fn balance_accepts_only_plain_digits() {
        let parse = |raw: &str| {
            AccountsConfig {
                count: None,
                accounts_balance: Some(raw.to_owned()),
            }
            .balance()
            .unwrap()
        };
        assert_eq!(parse("0"), Ok(U256::ZERO));
        assert_eq!(parse(""), Err(BalanceError::Empty));
        assert_eq!(parse(" "), Err(BalanceError::InvalidDigit(' ')));
        assert_eq!(parse(" 42 "), Err(BalanceError::InvalidDigit(' ')));
        assert_eq!(parse("1_000"), Err(BalanceError::InvalidDigit('_')));
        assert_eq!(parse("0x10"), Err(BalanceError::InvalidDigit('x')));
        assert_eq!(parse(&"9".repeat(80)), Err(BalanceError::Overflow));
    }

    #[test]
    fn omits_unset_fields_on_output() {
        let cfg = DevChainConfig::new("0.8.19");
        let encoded = serde_json::to_string(&cfg).unwrap();
        assert_eq!(encoded, r#"{"solidity":"0.8.19"}"#);
    }

    #[test]
    fn paths_entries_lists_only_configured_roles() {
        let paths = PathsConfig {
            sources: Some("contracts".to_owned()),
            artifacts: Some("build".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            paths.entries(),
            vec![("sources", "contracts"), ("artifacts", "build")]
        );
    }
}
