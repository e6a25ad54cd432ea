//! Asset kinds and their fixed directory names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Kind of asset stored under a project namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// YAML pipeline definitions (`pipelines/`).
    Pipelines,
    /// Helper scripts referenced by pipelines and plugins (`scripts/`).
    Scripts,
}

impl AssetKind {
    /// Every kind, in directory order.
    pub const ALL: [AssetKind; 2] = [AssetKind::Pipelines, AssetKind::Scripts];

    /// Subdirectory name under a project directory.
    ///
    /// ```
    /// use etl_assets_core::AssetKind;
    ///
    /// assert_eq!(AssetKind::Pipelines.dir_name(), "pipelines");
    /// assert_eq!(AssetKind::Scripts.dir_name(), "scripts");
    /// ```
    pub const fn dir_name(self) -> &'static str {
        match self {
            AssetKind::Pipelines => "pipelines",
            AssetKind::Scripts => "scripts",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for AssetKind {
    type Err = Error;

    /// Accepts the directory name or its singular, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pipelines" | "pipeline" => Ok(AssetKind::Pipelines),
            "scripts" | "script" => Ok(AssetKind::Scripts),
            _ => Err(Error::UnknownAssetKind(s.to_string())),
        }
    }
}
