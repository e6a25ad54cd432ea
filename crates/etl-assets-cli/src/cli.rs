//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Locate shared ETL pipeline definitions and helper scripts.
#[derive(Parser, Debug)]
#[command(name = "etl-assets", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "ETL_ASSETS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Repository root containing projects/ (discovered when omitted)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the directory for a project's pipelines or scripts
    Resolve {
        /// Asset kind: pipelines or scripts
        kind: String,

        /// Project id (defaults to the configured default project)
        #[arg(short, long)]
        project: Option<String>,

        /// Print the absolute path under the discovered root
        #[arg(long)]
        absolute: bool,
    },

    /// List project namespaces under projects/
    Projects,

    /// List assets visible to a project
    List {
        /// Asset kind: pipelines or scripts
        kind: String,

        /// Project id (defaults to the configured default project)
        #[arg(short, long)]
        project: Option<String>,

        /// Only list the project's own directory
        #[arg(long)]
        no_fallback: bool,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Find one asset, falling back to shared and legacy locations
    Find {
        /// Asset kind: pipelines or scripts
        kind: String,

        /// Asset path relative to the kind directory, e.g. yanroy/build.py
        name: String,

        /// Project id (defaults to the configured default project)
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Check the repository layout
    Check {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the config file path that would be loaded
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Target file (defaults to the user config path)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::try_parse_from(["etl-assets", "resolve", "scripts", "-p", "proj1"]).unwrap();
        let Command::Resolve {
            kind,
            project,
            absolute,
        } = cli.command
        else {
            unreachable!("Expected Resolve");
        };
        assert_eq!(kind, "scripts");
        assert_eq!(project.as_deref(), Some("proj1"));
        assert!(!absolute);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "etl-assets",
            "list",
            "pipelines",
            "--root",
            "/srv/etl",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/srv/etl")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_config_init() {
        let cli =
            Cli::try_parse_from(["etl-assets", "config", "init", "--file", "x.toml", "--force"])
                .unwrap();
        let Command::Config {
            action: ConfigAction::Init { file, force },
        } = cli.command
        else {
            unreachable!("Expected Config Init");
        };
        assert_eq!(file, Some(PathBuf::from("x.toml")));
        assert!(force);
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["etl-assets"]).is_err());
    }
}
