use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("media root is not usable: {path}")]
    InvalidRoot { path: PathBuf },

    #[error("unknown media locator: {0}")]
    UnknownLocator(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
