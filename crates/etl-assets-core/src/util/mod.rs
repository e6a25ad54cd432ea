//! Utility modules for path handling and asset root discovery.
//!
//! # Modules
//!
//! - [`paths`]: Generic path utilities (tilde expansion, marker search)
//! - [`resolver`]: Configurable asset root resolution

pub mod paths;
pub mod resolver;
