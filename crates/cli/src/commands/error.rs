use crate::util::bold;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("{} already exists; pass {} to replace it", .0.display(), bold("--force"))]
    FileExists(PathBuf),

    #[error("key '{0}' is not set")]
    KeyNotSet(String),
}
