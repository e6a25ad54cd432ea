//! Handler functions for config CLI commands (`path`, `show`, `init`).

use std::io::Write;
use std::path::{Path, PathBuf};

use etl_assets_core::config::resolve_config_path;
use etl_assets_core::{AssetsConfig, Error as CoreError};

use crate::cli::ConfigAction;
use crate::error::Result;

/// Handle a config subcommand.
pub fn handle_config_command(
    config_path: Option<&Path>,
    action: ConfigAction,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path, out),
        ConfigAction::Show => {
            let config = AssetsConfig::load(config_path)?;
            cmd_config_show(&config, out)
        }
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force, out),
    }
}

/// Show the config file path that would be loaded.
pub fn cmd_config_path(config_path: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    let env = |key: &str| std::env::var(key).ok();
    let path = resolve_config_path(config_path, &env, Path::new("."))
        .ok_or_else(|| CoreError::config("Could not determine config directory for this platform"))?;

    writeln!(out, "{}", path.display())?;
    if !path.exists() {
        log::warn!(
            "{} does not exist; run `etl-assets config init` to create it",
            path.display()
        );
    }
    Ok(())
}

/// Print the effective configuration as TOML.
pub fn cmd_config_show(config: &AssetsConfig, out: &mut dyn Write) -> Result<()> {
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}

/// Write a default configuration file.
pub fn cmd_config_init(file: Option<&Path>, force: bool, out: &mut dyn Write) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => AssetsConfig::default_config_path()
            .ok_or_else(|| CoreError::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(CoreError::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        ))
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CoreError::io_with_path(e, parent))?;
    }

    let toml_str = AssetsConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| CoreError::io_with_path(e, &path))?;

    writeln!(out, "Config file created at {}", path.display())?;
    Ok(())
}
