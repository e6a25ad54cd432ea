//! Locator configuration.
//!
//! Loaded from a TOML file and then overridden by environment variables.
//! The config file is looked up in order:
//!
//! 1. An explicit path (`--config`)
//! 2. `ETL_ASSETS_CONFIG`
//! 3. `./etl-assets.toml`
//! 4. `<config dir>/etl-assets/config.toml`
//!
//! A file named by `--config` or `ETL_ASSETS_CONFIG` must exist. Otherwise
//! a missing file is not an error and defaults apply.
//!
//! ```toml
//! root = "~/src/research-etl-assets"
//! default_project = "shared"
//! legacy_fallback = true
//! pipeline_extensions = ["yaml", "yml"]
//! ```

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ids::ProjectId;
use crate::util::paths::expand_tilde;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "ETL_ASSETS_CONFIG";
/// Environment override for [`AssetsConfig::root`].
pub const ROOT_ENV_VAR: &str = crate::util::resolver::ROOT_ENV_VAR;
/// Environment override for [`AssetsConfig::default_project`].
pub const DEFAULT_PROJECT_ENV_VAR: &str = "ETL_ASSETS_DEFAULT_PROJECT";
/// Environment override for [`AssetsConfig::legacy_fallback`].
pub const LEGACY_FALLBACK_ENV_VAR: &str = "ETL_ASSETS_LEGACY_FALLBACK";

/// Config file looked for in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "etl-assets.toml";

/// Locator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Repository root containing `projects/`. Discovered when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Project used when a command omits one.
    pub default_project: ProjectId,

    /// Search the pre-migration root-level `pipelines/` and `scripts/`
    /// directories after the shared namespace.
    pub legacy_fallback: bool,

    /// File extensions (without dot, lowercase) recognized as pipelines.
    pub pipeline_extensions: Vec<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: None,
            default_project: ProjectId::shared(),
            legacy_fallback: true,
            pipeline_extensions: vec!["yaml".to_string(), "yml".to_string()],
        }
    }
}

impl AssetsConfig {
    /// Load configuration from the resolved config file and the process
    /// environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with(explicit, |key: &str| std::env::var(key).ok(), Path::new("."))
    }

    /// Load configuration reading variables through `lookup`.
    ///
    /// `cwd` is the directory checked for [`LOCAL_CONFIG_FILE`].
    pub fn load_with<F>(explicit: Option<&Path>, lookup: F, cwd: &Path) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = explicit.is_some()
            || lookup(CONFIG_ENV_VAR).is_some_and(|v| !v.trim().is_empty());
        let path = resolve_config_path(explicit, &lookup, cwd);
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) if required => {
                return Err(Error::config(format!(
                    "Config file {} does not exist",
                    path.display()
                )));
            }
            _ => Self::default(),
        };
        config.apply_env_overrides(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file without applying environment overrides.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| Error::parse(e.to_string()))?;
        config.root = config.root.map(|r| expand_tilde(&r.to_string_lossy()));
        config.validate()?;
        Ok(config)
    }

    /// Apply `ETL_ASSETS_*` overrides using `lookup` to read variables.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup(ROOT_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            self.root = Some(expand_tilde(&root));
        }
        if let Some(project) = lookup(DEFAULT_PROJECT_ENV_VAR) {
            self.default_project = ProjectId::parse(project.trim()).map_err(|e| {
                Error::config(format!("{DEFAULT_PROJECT_ENV_VAR}: {e}"))
            })?;
        }
        if let Some(flag) = lookup(LEGACY_FALLBACK_ENV_VAR) {
            self.legacy_fallback = parse_bool(&flag).ok_or_else(|| {
                Error::config(format!(
                    "{LEGACY_FALLBACK_ENV_VAR}: expected true/false, got '{flag}'"
                ))
            })?;
        }
        Ok(())
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.pipeline_extensions.is_empty() {
            return Err(Error::config("pipeline_extensions must not be empty"));
        }
        for ext in &self.pipeline_extensions {
            if ext.is_empty() || ext.starts_with('.') || ext.contains('/') {
                return Err(Error::config(format!(
                    "Invalid pipeline extension '{ext}': expected a bare extension like 'yaml'"
                )));
            }
        }
        Ok(())
    }

    /// Whether `ext` (lowercase, no dot) marks a pipeline file.
    pub fn is_pipeline_extension(&self, ext: &str) -> bool {
        self.pipeline_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Default user config path: `<config dir>/etl-assets/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("etl-assets").join("config.toml"))
    }
}

/// Resolve which config file to read.
///
/// `cwd` is the directory checked for [`LOCAL_CONFIG_FILE`].
pub fn resolve_config_path<F>(explicit: Option<&Path>, lookup: &F, cwd: &Path) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = explicit {
        return Some(expand_tilde(&path.to_string_lossy()));
    }
    if let Some(path) = lookup(CONFIG_ENV_VAR).filter(|v| !v.trim().is_empty()) {
        return Some(expand_tilde(&path));
    }
    let local = cwd.join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }
    AssetsConfig::default_config_path()
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
