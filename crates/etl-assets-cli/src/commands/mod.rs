//! Command handlers.
//!
//! Handlers write their output to a caller-supplied writer so they can be
//! exercised without a terminal. Diagnostics go through `log`.

mod assets;

pub use assets::{cmd_check, cmd_find, cmd_list, cmd_projects, cmd_resolve};

use std::io::Write;
use std::path::{Path, PathBuf};

use etl_assets_core::{AssetLocator, AssetsConfig, ProjectId, RootResolver};

use crate::cli::{Cli, Command};
use crate::config_handlers::handle_config_command;
use crate::error::Result;

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective configuration.
    pub config: AssetsConfig,
    /// `--root` override.
    pub root: Option<PathBuf>,
}

impl Context {
    /// Build a context from loaded configuration and an optional root
    /// override.
    pub fn new(config: AssetsConfig, root: Option<PathBuf>) -> Self {
        Self { config, root }
    }

    /// Load configuration from `config_path` and the environment.
    pub fn load(config_path: Option<&Path>, root: Option<PathBuf>) -> Result<Self> {
        Ok(Self::new(AssetsConfig::load(config_path)?, root))
    }

    /// Discover the repository root and build a locator over it.
    ///
    /// `--root` beats the configured root, which beats discovery.
    pub fn locator(&self) -> Result<AssetLocator> {
        let explicit = self.root.as_deref().or(self.config.root.as_deref());
        let root = RootResolver::from_env().with_explicit(explicit).resolve()?;
        log::info!("Using asset root {}", root.display());
        Ok(AssetLocator::new(root))
    }

    /// Parse `project`, or fall back to the configured default.
    pub fn project(&self, project: Option<&str>) -> Result<ProjectId> {
        match project {
            Some(p) => Ok(ProjectId::parse(p)?),
            None => Ok(self.config.default_project.clone()),
        }
    }
}

/// Dispatch a parsed command line.
///
/// Returns `false` when the command ran but found problems (a failing
/// `check`).
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<bool> {
    let Cli {
        config,
        root,
        command,
        ..
    } = cli;
    let context = || Context::load(config.as_deref(), root.clone());

    match command {
        Command::Resolve {
            kind,
            project,
            absolute,
        } => {
            // The bare mapping needs no configuration once the project is given.
            let ctx = if absolute || project.is_none() {
                context()?
            } else {
                Context::new(AssetsConfig::default(), root.clone())
            };
            cmd_resolve(&ctx, project.as_deref(), &kind, absolute, out)?
        }
        Command::Projects => cmd_projects(&context()?, out)?,
        Command::List {
            kind,
            project,
            no_fallback,
            json,
        } => cmd_list(&context()?, project.as_deref(), &kind, !no_fallback, json, out)?,
        Command::Find {
            kind,
            name,
            project,
        } => cmd_find(&context()?, project.as_deref(), &kind, &name, out)?,
        Command::Check { json } => return cmd_check(&context()?, json, out),
        Command::Config { action } => handle_config_command(config.as_deref(), action, out)?,
    }
    Ok(true)
}
