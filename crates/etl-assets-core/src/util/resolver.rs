//! Asset root discovery.
//!
//! `RootResolver` locates the repository directory that contains
//! `projects/`, checking in order:
//!
//! 1. An explicit root (from configuration or `--root`)
//! 2. The `ETL_ASSETS_ROOT` environment variable
//! 3. The nearest ancestor of the search start containing the marker
//! 4. A fallback path
//!
//! # Example
//!
//! ```no_run
//! use etl_assets_core::util::resolver::RootResolver;
//!
//! let root = RootResolver::from_env()
//!     .with_fallback("~/src/research-etl-assets")
//!     .resolve()
//!     .unwrap();
//! println!("assets live under {}", root.display());
//! ```

use std::env;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::locator::PROJECTS_DIR;
use crate::util::paths::{expand_tilde, find_dir_with_marker};

/// Environment variable naming the asset root.
pub const ROOT_ENV_VAR: &str = "ETL_ASSETS_ROOT";

/// Root locator with configurable sources.
#[derive(Debug, Clone, Default)]
pub struct RootResolver {
    /// Explicit root, highest priority
    explicit: Option<PathBuf>,
    /// Value of `ETL_ASSETS_ROOT` captured at construction
    env_root: Option<String>,
    /// Directory the marker search starts from
    search_start: Option<PathBuf>,
    /// Marker identifying the root (relative to it)
    marker: Option<String>,
    /// Last-resort root
    fallback: Option<PathBuf>,
}

impl RootResolver {
    /// Create a resolver with no sources configured.
    ///
    /// The marker defaults to `projects` and the search starts from the
    /// current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver that captures `ETL_ASSETS_ROOT` from the process
    /// environment.
    pub fn from_env() -> Self {
        Self::new().with_env_value(env::var(ROOT_ENV_VAR).ok())
    }

    /// Set an explicit root (supports ~ expansion).
    pub fn with_explicit(mut self, root: Option<&Path>) -> Self {
        self.explicit = root.map(|p| expand_tilde(&p.to_string_lossy()));
        self
    }

    /// Set the value used in place of `ETL_ASSETS_ROOT`.
    pub fn with_env_value(mut self, value: Option<String>) -> Self {
        self.env_root = value.filter(|v| !v.trim().is_empty());
        self
    }

    /// Set the directory the marker search starts from.
    pub fn with_search_start(mut self, start: impl Into<PathBuf>) -> Self {
        self.search_start = Some(start.into());
        self
    }

    /// Set the marker that identifies the root directory.
    pub fn with_marker(mut self, marker: &str) -> Self {
        self.marker = Some(marker.to_string());
        self
    }

    /// Set a fallback root (supports ~ expansion).
    pub fn with_fallback(mut self, path: &str) -> Self {
        self.fallback = Some(expand_tilde(path));
        self
    }

    /// The marker in effect.
    pub fn marker(&self) -> &str {
        self.marker.as_deref().unwrap_or(PROJECTS_DIR)
    }

    /// Resolve the asset root.
    ///
    /// An explicit root or `ETL_ASSETS_ROOT` that does not exist is an
    /// error rather than a reason to keep searching.
    pub fn resolve(&self) -> Result<PathBuf> {
        let mut searched = Vec::new();

        // 1. Explicit root
        if let Some(root) = &self.explicit {
            debug!("Using explicit asset root {}", root.display());
            return existing_dir(root);
        }

        // 2. Environment variable
        if let Some(value) = &self.env_root {
            let root = expand_tilde(value);
            debug!("Using asset root from ${ROOT_ENV_VAR}: {}", root.display());
            return existing_dir(&root);
        }
        searched.push(format!("${ROOT_ENV_VAR}"));

        // 3. Walk up looking for the marker
        let start = match &self.search_start {
            Some(start) => Some(start.clone()),
            None => env::current_dir().ok(),
        };
        if let Some(start) = start {
            if let Some(root) = find_dir_with_marker(&start, self.marker()) {
                debug!("Found '{}' marker at {}", self.marker(), root.display());
                return Ok(root);
            }
            searched.push(format!("ancestors of {} for '{}'", start.display(), self.marker()));
        }

        // 4. Fallback
        if let Some(fallback) = &self.fallback {
            if fallback.is_dir() {
                debug!("Using fallback asset root {}", fallback.display());
                return Ok(fallback.clone());
            }
            searched.push(fallback.display().to_string());
        }

        Err(Error::RootNotFound { searched })
    }
}

fn existing_dir(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        Ok(path.to_path_buf())
    } else {
        Err(Error::RootNotFound {
            searched: vec![path.display().to_string()],
        })
    }
}
