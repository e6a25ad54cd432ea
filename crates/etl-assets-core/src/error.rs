//! Error types for etl-assets-core.

use std::path::{Path, PathBuf};

/// Errors that can occur while locating project assets.
///
/// Marked `#[non_exhaustive]` so new failure modes can be added without
/// breaking downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Project identifier is empty or unsafe as a path segment.
    #[error("Invalid project id '{id}': {reason}")]
    InvalidProjectId {
        /// The rejected identifier
        id: String,
        /// Why it was rejected
        reason: String,
    },

    /// Asset kind is not one of the recognized kinds.
    #[error("Unknown asset kind '{0}': expected 'pipelines' or 'scripts'")]
    UnknownAssetKind(String),

    /// Asset name is empty, absolute, or escapes its directory.
    #[error("Invalid asset name '{name}': {reason}")]
    InvalidAssetName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// No asset with this name exists anywhere in the fallback chain.
    #[error("Asset not found: {kind}/{name} (project '{project}')")]
    AssetNotFound {
        /// Project the lookup started from
        project: String,
        /// Asset kind directory
        kind: String,
        /// Requested asset name
        name: String,
    },

    /// Repository root containing `projects/` could not be located.
    #[error("Could not locate asset root (searched: {})", .searched.join(", "))]
    RootNotFound {
        /// Locations that were tried, in order
        searched: Vec<String>,
    },

    /// I/O failure, optionally tied to a path.
    #[error("I/O error{}: {source}", .path.as_ref().map(|p| format!(" at {}", p.display())).unwrap_or_default())]
    Io {
        /// Path involved, if known
        path: Option<PathBuf>,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A TOML or YAML document could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Convenience `Result` type alias for etl-assets operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}

impl Error {
    /// Creates an invalid project id error.
    pub fn invalid_project_id<I, R>(id: I, reason: R) -> Self
    where
        I: Into<String>,
        R: Into<String>,
    {
        Error::InvalidProjectId {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid asset name error.
    pub fn invalid_asset_name<N, R>(name: N, reason: R) -> Self
    where
        N: Into<String>,
        R: Into<String>,
    {
        Error::InvalidAssetName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Creates a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse(message.into())
    }

    /// Returns whether the error was caused by caller input rather than
    /// the environment.
    ///
    /// User errors are permanent: repeating the call with the same input
    /// fails the same way.
    pub fn is_user_error(&self) -> bool {
        match self {
            Error::InvalidProjectId { .. } => true,
            Error::UnknownAssetKind(_) => true,
            Error::InvalidAssetName { .. } => true,
            Error::AssetNotFound { .. } => true,
            Error::Config(_) => true,
            Error::Parse(_) => true,
            Error::RootNotFound { .. } => false,
            Error::Io { .. } => false,
        }
    }
}
