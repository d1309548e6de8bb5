use crate::{
    error::ValidationError,
    preset::{DEV_CHAIN_ID, IN_PROCESS_NETWORK},
    registry,
    template::{expand_placeholders, placeholder_names},
    types::{DevChainConfig, NetworkConfig, PathsConfig},
    Error, Result,
};
use regex::Regex;
use std::{collections::HashMap, fmt, path::Path, sync::LazyLock};
use tracing::warn;

/// TOML integers are signed 64-bit, so larger values cannot be written back to disk.
const MAX_INTEGER: u64 = i64::MAX as u64;

static SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+$").expect("static regex is valid")
});

/// Suspicious but legal configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LintWarning {
    /// The in-process network does not use the dev chain id.
    UnexpectedDevChainId { network: String, chain_id: u64 },
    /// A network reuses the chain id of a public chain.
    PublicChainId {
        network: String,
        chain_id: u64,
        chain_name: &'static str,
    },
    /// Automine is off and no interval is set, so no blocks are produced.
    MiningDisabled { network: String },
    /// Zero accounts are provisioned.
    NoAccounts { network: String },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintWarning::UnexpectedDevChainId { network, chain_id } => write!(
                f,
                "network '{network}' uses chainId {chain_id}; expected {DEV_CHAIN_ID}"
            ),
            LintWarning::PublicChainId {
                network,
                chain_id,
                chain_name,
            } => write!(
                f,
                "network '{network}' uses chainId {chain_id}, which belongs to {chain_name}"
            ),
            LintWarning::MiningDisabled { network } => write!(
                f,
                "network '{network}' has mining.auto = false and no mining.interval; blocks will never be mined"
            ),
            LintWarning::NoAccounts { network } => {
                write!(f, "network '{network}' provisions 0 accounts")
            }
        }
    }
}

impl DevChainConfig {
    /// Checks every schema-level rule and reports all violations at once.
    pub fn validate(&self) -> Result<()> {
        let issues = self.validation_errors();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Error::Invalid(issues))
        }
    }

    pub fn validation_errors(&self) -> Vec<ValidationError> {
        let mut issues = vec![];

        let version = self.solidity.version();
        if !SEMVER.is_match(version) {
            issues.push(ValidationError::SolidityVersion(version.to_owned()));
        }
        if let Some(optimizer) = self.solidity.optimizer() {
            if optimizer.enabled && optimizer.runs == 0 {
                issues.push(ValidationError::OptimizerRunsZero);
            }
        }

        for (name, network) in &self.networks {
            check_network(name, network, &mut issues);
        }

        if let Some(paths) = &self.paths {
            check_paths(paths, &mut issues);
        }

        if let Some(mocha) = &self.mocha {
            if mocha.timeout == 0 {
                issues.push(ValidationError::MochaTimeoutZero);
            }
            check_range("mocha.timeout", Some(mocha.timeout), &mut issues);
        }

        if let Some(default_network) = &self.default_network {
            if !self.networks.contains_key(default_network) {
                issues.push(ValidationError::DefaultNetworkUndefined(
                    default_network.to_owned(),
                ));
            }
        }

        issues
    }

    /// Validates, then logs any lint warnings.
    pub fn validate_and_lint(&self) -> Result<Vec<LintWarning>> {
        self.validate()?;
        let warnings = self.lint();
        for warning in &warnings {
            warn!("{warning}");
        }
        Ok(warnings)
    }

    pub fn lint(&self) -> Vec<LintWarning> {
        let mut warnings = vec![];
        for (name, network) in &self.networks {
            if let Some(chain_id) = network.chain_id {
                if name == IN_PROCESS_NETWORK && chain_id != DEV_CHAIN_ID {
                    warnings.push(LintWarning::UnexpectedDevChainId {
                        network: name.to_owned(),
                        chain_id,
                    });
                }
                if let Some(known) = registry::by_id(chain_id).filter(|c| !c.is_local()) {
                    warnings.push(LintWarning::PublicChainId {
                        network: name.to_owned(),
                        chain_id,
                        chain_name: known.name,
                    });
                }
            }
            if let Some(mining) = &network.mining {
                if mining.auto == Some(false) && mining.interval.is_none() {
                    warnings.push(LintWarning::MiningDisabled {
                        network: name.to_owned(),
                    });
                }
            }
            if let Some(accounts) = &network.accounts {
                if accounts.count == Some(0) {
                    warnings.push(LintWarning::NoAccounts {
                        network: name.to_owned(),
                    });
                }
            }
        }
        warnings
    }
}

fn check_network(name: &str, network: &NetworkConfig, issues: &mut Vec<ValidationError>) {
    let network_name = || name.to_owned();

    if network.chain_id == Some(0) {
        issues.push(ValidationError::ChainIdZero {
            network: network_name(),
        });
    }
    if network.port == Some(0) {
        issues.push(ValidationError::PortZero {
            network: network_name(),
        });
    }
    if network.timeout == Some(0) {
        issues.push(ValidationError::TimeoutZero {
            network: network_name(),
        });
    }

    match (&network.host, network.port) {
        (Some(_), None) => issues.push(ValidationError::IncompleteEndpoint {
            network: network_name(),
            present: "host",
            missing: "port",
        }),
        (None, Some(_)) => issues.push(ValidationError::IncompleteEndpoint {
            network: network_name(),
            present: "port",
            missing: "host",
        }),
        _ => {}
    }

    if let Some(raw) = &network.url {
        // placeholders are filled from the environment later; any value will do here
        let stand_in: HashMap<String, String> = placeholder_names(raw)
            .into_iter()
            .map(|name| (name.to_owned(), "x".to_owned()))
            .collect();
        match expand_placeholders(raw, &stand_in) {
            Ok(expanded) => {
                if let Err(e) = url::Url::parse(&expanded) {
                    issues.push(ValidationError::Url {
                        network: network_name(),
                        url: raw.to_owned(),
                        reason: e.to_string(),
                    });
                }
            }
            Err(source) => issues.push(ValidationError::UrlTemplate {
                network: network_name(),
                url: raw.to_owned(),
                source,
            }),
        }
    }

    let field = |key: &str| format!("networks.{name}.{key}");
    check_range(&field("chainId"), network.chain_id, issues);
    check_range(&field("timeout"), network.timeout, issues);

    if let Some(mining) = &network.mining {
        if mining.interval == Some(0) {
            issues.push(ValidationError::MiningIntervalZero {
                network: network_name(),
            });
        }
        check_range(&field("mining.interval"), mining.interval, issues);
    }

    if let Some(accounts) = &network.accounts {
        check_range(&field("accounts.count"), accounts.count, issues);
        if let Some(Err(_)) = accounts.balance() {
            issues.push(ValidationError::AccountsBalance {
                network: network_name(),
                value: accounts.accounts_balance.clone().unwrap_or_default(),
            });
        }
    }
}

fn check_paths(paths: &PathsConfig, issues: &mut Vec<ValidationError>) {
    for (role, path) in paths.entries() {
        if path.trim().is_empty() {
            issues.push(ValidationError::PathEmpty { role });
        } else if Path::new(path).is_absolute() || path.starts_with('/') || path.starts_with('\\') {
            issues.push(ValidationError::PathAbsolute {
                role,
                path: path.to_owned(),
            });
        }
    }
}

fn check_range(field: &str, value: Option<u64>, issues: &mut Vec<ValidationError>) {
    if let Some(value) = value.filter(|v| *v > MAX_INTEGER) {
        issues.push(ValidationError::OutOfRange {
            field: field.to_owned(),
            value,
            max: MAX_INTEGER,
        });
    }
}
