//! Error types for etl-assets-cli

use thiserror::Error;

/// Result type alias for etl-assets-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in etl-assets-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from etl-assets-core
    #[error(transparent)]
    Core(#[from] etl_assets_core::Error),

    /// Failure writing command output
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON rendering failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// `2` for bad input, `1` for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Core(e) if e.is_user_error() => 2,
            _ => 1,
        }
    }
}
