#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! etl-assets core library
//!
//! Locates shared ETL pipeline definitions and helper scripts laid out as
//! `projects/<project_id>/{pipelines,scripts}/`.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`ids`]: `ProjectId` and `AssetName` validation
//! - [`kind`]: Asset kinds and their directory names
//! - [`locator`]: Pure path resolution and the rooted locator
//! - [`catalog`]: Asset enumeration and fallback lookup
//! - [`inspect`]: Layout diagnostics
//! - [`config`]: TOML configuration with environment overrides
//! - [`util`]: Path helpers and asset root discovery

pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod inspect;
pub mod kind;
pub mod locator;
pub mod util;

mod proptests;

// Re-exports for convenience
pub use catalog::{Asset, Catalog, Origin};
pub use config::AssetsConfig;
pub use error::{Error, Result};
pub use ids::{AssetName, ProjectId, SHARED_PROJECT};
pub use inspect::{inspect, Finding, Report, Severity};
pub use kind::AssetKind;
pub use locator::{resolve, resolve_str, AssetLocator};
pub use util::resolver::RootResolver;
