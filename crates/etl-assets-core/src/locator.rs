//! Project asset locator.
//!
//! Maps `(project_id, kind)` to `projects/<project_id>/<kind>/`. The
//! mapping itself is pure: [`resolve`] and [`resolve_str`] never touch the
//! filesystem. [`AssetLocator`] anchors the relative paths at a repository
//! root and adds the optional I/O queries (existence, project listing).
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use etl_assets_core::{locator, AssetKind, ProjectId};
//!
//! let path = locator::resolve(&ProjectId::shared(), AssetKind::Pipelines);
//! assert_eq!(path, PathBuf::from("projects/shared/pipelines/"));
//!
//! assert!(locator::resolve_str("", "pipelines").is_err());
//! assert!(locator::resolve_str("proj1", "models").is_err());
//! ```

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::ids::ProjectId;
use crate::kind::AssetKind;

/// Top-level directory holding every project namespace.
pub const PROJECTS_DIR: &str = "projects";

/// Relative path of a project namespace: `projects/<project_id>`.
pub fn project_path(project: &ProjectId) -> PathBuf {
    Path::new(PROJECTS_DIR).join(project.as_str())
}

/// Relative path of an asset-kind directory: `projects/<project_id>/<kind>`.
///
/// Pure and deterministic.
pub fn resolve(project: &ProjectId, kind: AssetKind) -> PathBuf {
    project_path(project).join(kind.dir_name())
}

/// String entry point for [`resolve`].
///
/// Fails with [`Error::InvalidProjectId`] or [`Error::UnknownAssetKind`];
/// the project is validated first.
pub fn resolve_str(project: &str, kind: &str) -> Result<PathBuf> {
    let project = ProjectId::parse(project)?;
    let kind: AssetKind = kind.parse()?;
    Ok(resolve(&project, kind))
}

/// Render a resolved directory the way the layout documents it, with `/`
/// separators and a trailing slash.
pub fn display_path(project: &ProjectId, kind: AssetKind) -> String {
    format!("{PROJECTS_DIR}/{project}/{}/", kind.dir_name())
}

/// Asset locator anchored at a repository root.
///
/// Immutable after construction; clone freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocator {
    root: PathBuf,
}

impl AssetLocator {
    /// Create a locator for the repository at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/projects`.
    pub fn projects_dir(&self) -> PathBuf {
        self.root.join(PROJECTS_DIR)
    }

    /// `<root>/projects/<project_id>`.
    pub fn project_dir(&self, project: &ProjectId) -> PathBuf {
        self.root.join(project_path(project))
    }

    /// `<root>/projects/<project_id>/<kind>`.
    pub fn asset_dir(&self, project: &ProjectId, kind: AssetKind) -> PathBuf {
        let dir = self.root.join(resolve(project, kind));
        debug!("Resolved {project}/{kind} to {}", dir.display());
        dir
    }

    /// `<root>/<kind>`, the pre-migration location for shared assets.
    pub fn legacy_dir(&self, kind: AssetKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }

    /// Whether the asset-kind directory exists.
    pub fn exists(&self, project: &ProjectId, kind: AssetKind) -> bool {
        self.asset_dir(project, kind).is_dir()
    }

    /// Project namespaces present under `projects/`, sorted.
    ///
    /// Directories whose names are not valid identifiers are skipped with
    /// a warning. A missing `projects/` directory yields an empty list.
    pub fn projects(&self) -> Result<Vec<ProjectId>> {
        let dir = self.projects_dir();
        if !dir.is_dir() {
            debug!("No projects directory at {}", dir.display());
            return Ok(Vec::new());
        }

        let mut projects = Vec::new();
        for entry in std::fs::read_dir(&dir).map_err(|e| Error::io_with_path(e, &dir))? {
            let entry = entry.map_err(|e| Error::io_with_path(e, &dir))?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                warn!("Skipping non-UTF-8 project directory {}", path.display());
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            match ProjectId::parse(&name) {
                Ok(id) => projects.push(id),
                Err(e) => warn!("Skipping project directory {}: {e}", path.display()),
            }
        }
        projects.sort();
        Ok(projects)
    }
}
