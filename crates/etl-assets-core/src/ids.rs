//! Identifier types for project namespaces and asset names.
//!
//! [`ProjectId`] names a directory under `projects/`. The value `shared`
//! is reserved for the common namespace that every project falls back to.
//! [`AssetName`] is a relative path to a file beneath an asset-kind
//! directory, e.g. `yanroy/build_tiles_of_interest.py`.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Reserved identifier of the shared namespace.
pub const SHARED_PROJECT: &str = "shared";

/// Upper bound on identifier length, in bytes.
pub const MAX_PROJECT_ID_LEN: usize = 64;

/// Validated project namespace identifier.
///
/// Accepted identifiers are 1 to [`MAX_PROJECT_ID_LEN`] bytes of ASCII
/// alphanumerics, `-` and `_`, starting with an alphanumeric. Case is
/// preserved: `Shared` is a regular project, not the reserved namespace.
///
/// # Examples
///
/// ```
/// use etl_assets_core::ProjectId;
///
/// let id = ProjectId::parse("field-mapping_2024").unwrap();
/// assert_eq!(id.as_str(), "field-mapping_2024");
/// assert!(!id.is_shared());
///
/// assert!(ProjectId::parse("").is_err());
/// assert!(ProjectId::parse("../etc").is_err());
/// assert!(ProjectId::shared().is_shared());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(String);

impl ProjectId {
    /// Parses and validates a project identifier.
    pub fn parse(id: &str) -> Result<Self> {
        validate_project_id(id)?;
        Ok(Self(id.to_string()))
    }

    /// The reserved shared namespace.
    pub fn shared() -> Self {
        Self(SHARED_PROJECT.to_string())
    }

    /// Returns `true` for the reserved shared namespace.
    pub fn is_shared(&self) -> bool {
        self.0 == SHARED_PROJECT
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_project_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::invalid_project_id(id, "must not be empty"));
    }
    if id.len() > MAX_PROJECT_ID_LEN {
        return Err(Error::invalid_project_id(
            id,
            format!("must be at most {MAX_PROJECT_ID_LEN} bytes"),
        ));
    }
    if let Some(bad) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(Error::invalid_project_id(
            id,
            format!(
                "contains '{}'; only ASCII letters, digits, '-' and '_' are allowed",
                bad.escape_default()
            ),
        ));
    }
    if !id.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return Err(Error::invalid_project_id(id, "must start with a letter or digit"));
    }
    Ok(())
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProjectId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        validate_project_id(&s)?;
        Ok(Self(s))
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ProjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ProjectId::try_from(raw).map_err(serde::de::Error::custom)
    }
}

/// Relative path of an asset beneath its kind directory.
///
/// Always stored with `/` separators. Leading `./`, absolute paths, `..`
/// and empty segments are rejected so a name can never escape the
/// directory it is joined onto.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AssetName(String);

impl AssetName {
    /// Parses and validates an asset name.
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::invalid_asset_name(name, "must not be empty"));
        }
        if name.starts_with('/') || name.starts_with('\\') {
            return Err(Error::invalid_asset_name(name, "must be relative"));
        }
        if name.contains('\\') {
            return Err(Error::invalid_asset_name(name, "must use '/' separators"));
        }
        for segment in name.split('/') {
            match segment {
                "" => return Err(Error::invalid_asset_name(name, "contains an empty segment")),
                "." | ".." => {
                    return Err(Error::invalid_asset_name(
                        name,
                        "must not contain '.' or '..' segments",
                    ));
                }
                _ => {}
            }
        }
        Ok(Self(name.to_string()))
    }

    /// Builds a name from a path relative to a kind directory.
    ///
    /// Returns `None` if the path has non-normal components or is not
    /// valid UTF-8.
    pub fn from_relative_path(path: &Path) -> Option<Self> {
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_str()?),
                _ => return None,
            }
        }
        if segments.is_empty() {
            return None;
        }
        Some(Self(segments.join("/")))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the name to a platform path, relative to its kind directory.
    pub fn to_path(&self) -> PathBuf {
        self.0.split('/').collect()
    }

    /// Returns `true` if any segment is hidden (starts with `.`).
    pub fn is_hidden(&self) -> bool {
        self.0.split('/').any(|segment| segment.starts_with('.'))
    }

    /// Lowercased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.0)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AssetName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for AssetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
