use crate::commands::error::ArgsError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("invalid arg(s)")]
    Args(#[from] ArgsError),

    #[error("config error")]
    #[diagnostic(help("run `devchain presets` for known-good starting points"))]
    Config(#[from] devchain_config::Error),

    #[error("failed to serialize output")]
    Json(#[from] serde_json::Error),
}
