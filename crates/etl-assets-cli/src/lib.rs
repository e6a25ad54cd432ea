//! # etl-assets-cli
//!
//! Command-line front-end for the project asset locator:
//! - Path resolution for `projects/<project_id>/{pipelines,scripts}/`
//! - Project and asset listing with shared/legacy fallback
//! - Layout checks
//! - Config file management

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;

pub use error::{Error, Result};
