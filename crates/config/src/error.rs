use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("failed to fetch {url}: HTTP {status}")]
    RemoteStatus { url: String, status: u16 },

    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported config format for '{0}'; expected a .toml, .json or .yaml file")]
    UnknownFormat(String),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("value for '{key}' does not fit the config schema: {source}")]
    SchemaMismatch {
        key: String,
        source: serde_json::Error,
    },

    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    #[error("invalid configuration ({} issue(s)):\n{}", .0.len(), format_issues(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_issues(issues: &[ValidationError]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A single schema-level violation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("solidity version '{0}' is not of the form MAJOR.MINOR.PATCH")]
    SolidityVersion(String),

    #[error("optimizer is enabled with 0 runs")]
    OptimizerRunsZero,

    #[error("network '{network}': mining.interval must be positive")]
    MiningIntervalZero { network: String },

    #[error("network '{network}': accountsBalance '{value}' is not a non-negative integer")]
    AccountsBalance { network: String, value: String },

    #[error("network '{network}': chainId must be positive")]
    ChainIdZero { network: String },

    #[error("network '{network}': port must be positive")]
    PortZero { network: String },

    #[error("network '{network}': timeout must be positive")]
    TimeoutZero { network: String },

    #[error("network '{network}': url '{url}' is invalid ({reason})")]
    Url {
        network: String,
        url: String,
        reason: String,
    },

    #[error("network '{network}': url '{url}' has a malformed placeholder: {source}")]
    UrlTemplate {
        network: String,
        url: String,
        source: TemplateError,
    },

    #[error("network '{network}': '{present}' is set without '{missing}'")]
    IncompleteEndpoint {
        network: String,
        present: &'static str,
        missing: &'static str,
    },

    #[error("paths.{role} is empty")]
    PathEmpty { role: &'static str },

    #[error("paths.{role} must be relative, got '{path}'")]
    PathAbsolute { role: &'static str, path: String },

    #[error("mocha.timeout must be positive")]
    MochaTimeoutZero,

    #[error("defaultNetwork '{0}' is not defined in networks")]
    DefaultNetworkUndefined(String),

    #[error("{field} = {value} is larger than {max}, the largest integer a config file can hold")]
    OutOfRange { field: String, value: u64, max: u64 },
}

/// Why an `accountsBalance` string is not a wei amount.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BalanceError {
    #[error("balance is empty")]
    Empty,

    #[error("invalid digit '{0}'")]
    InvalidDigit(char),

    #[error("balance does not fit in 256 bits")]
    Overflow,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("no value for placeholder '{{{0}}}'")]
    MissingValue(String),

    #[error("unterminated placeholder starting at byte {0}")]
    Unterminated(usize),

    #[error("empty placeholder at byte {0}")]
    EmptyName(usize),
}
