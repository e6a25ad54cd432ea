//! Asset enumeration and lookup with namespace fallback.
//!
//! A lookup for project `p` walks the fallback chain:
//!
//! 1. `projects/<p>/<kind>/`
//! 2. `projects/shared/<kind>/` (skipped when `p` is `shared`)
//! 3. `<kind>/` at the repository root, when legacy fallback is enabled
//!
//! The first directory holding the name wins.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Serialize, Serializer};
use walkdir::{DirEntry, WalkDir};

use crate::config::AssetsConfig;
use crate::error::{Error, Result};
use crate::ids::{AssetName, ProjectId};
use crate::kind::AssetKind;
use crate::locator::AssetLocator;

/// Namespace an asset was found in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Origin {
    /// The requested project's own namespace.
    Project(ProjectId),
    /// `projects/shared/`.
    Shared,
    /// Pre-migration root-level directory.
    Legacy,
}

impl Origin {
    fn for_project(project: &ProjectId) -> Self {
        if project.is_shared() {
            Origin::Shared
        } else {
            Origin::Project(project.clone())
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Project(id) => write!(f, "project:{id}"),
            Origin::Shared => write!(f, "shared"),
            Origin::Legacy => write!(f, "legacy"),
        }
    }
}

impl Serialize for Origin {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A located asset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    /// Path relative to the kind directory.
    pub name: AssetName,
    /// Asset kind.
    pub kind: AssetKind,
    /// Namespace the file lives in.
    pub origin: Origin,
    /// Full path on disk.
    pub path: PathBuf,
}

/// Asset catalog over a locator.
#[derive(Debug, Clone)]
pub struct Catalog {
    locator: AssetLocator,
    config: AssetsConfig,
}

impl Catalog {
    /// Create a catalog using the fallback and extension settings from
    /// `config`.
    pub fn new(locator: AssetLocator, config: &AssetsConfig) -> Self {
        Self {
            locator,
            config: config.clone(),
        }
    }

    /// The underlying locator.
    pub fn locator(&self) -> &AssetLocator {
        &self.locator
    }

    /// Directories searched for `project`, in priority order.
    pub fn search_chain(&self, project: &ProjectId, kind: AssetKind) -> Vec<(Origin, PathBuf)> {
        let mut chain = vec![(
            Origin::for_project(project),
            self.locator.asset_dir(project, kind),
        )];
        if !project.is_shared() {
            chain.push((
                Origin::Shared,
                self.locator.asset_dir(&ProjectId::shared(), kind),
            ));
        }
        if self.config.legacy_fallback {
            chain.push((Origin::Legacy, self.locator.legacy_dir(kind)));
        }
        chain
    }

    /// Assets in the project's own directory only, sorted by name.
    ///
    /// Hidden entries are skipped. Pipelines are filtered by extension.
    /// A missing directory yields an empty list.
    pub fn list(&self, project: &ProjectId, kind: AssetKind) -> Result<Vec<Asset>> {
        let dir = self.locator.asset_dir(project, kind);
        self.list_dir(&dir, kind, Origin::for_project(project))
    }

    /// Assets visible to the project across the whole fallback chain.
    ///
    /// A name present earlier in the chain shadows the same name later.
    pub fn list_merged(&self, project: &ProjectId, kind: AssetKind) -> Result<Vec<Asset>> {
        let mut merged: BTreeMap<AssetName, Asset> = BTreeMap::new();
        for (origin, dir) in self.search_chain(project, kind) {
            for asset in self.list_dir(&dir, kind, origin)? {
                merged.entry(asset.name.clone()).or_insert(asset);
            }
        }
        Ok(merged.into_values().collect())
    }

    /// Find a single asset, walking the fallback chain.
    pub fn find(&self, project: &ProjectId, kind: AssetKind, name: &AssetName) -> Result<Asset> {
        for (origin, dir) in self.search_chain(project, kind) {
            let path = dir.join(name.to_path());
            if path.is_file() {
                debug!("Found {kind}/{name} in {origin} at {}", path.display());
                return Ok(Asset {
                    name: name.clone(),
                    kind,
                    origin,
                    path,
                });
            }
        }
        Err(Error::AssetNotFound {
            project: project.to_string(),
            kind: kind.to_string(),
            name: name.to_string(),
        })
    }

    fn accepts(&self, kind: AssetKind, name: &AssetName) -> bool {
        if name.is_hidden() {
            return false;
        }
        match kind {
            AssetKind::Scripts => true,
            AssetKind::Pipelines => name
                .extension()
                .is_some_and(|ext| self.config.is_pipeline_extension(&ext)),
        }
    }

    fn list_dir(&self, dir: &Path, kind: AssetKind, origin: Origin) -> Result<Vec<Asset>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut assets = Vec::new();
        for path in walk_files(dir) {
            let Ok(relative) = path.strip_prefix(dir) else {
                continue;
            };
            let Some(name) = AssetName::from_relative_path(relative) else {
                warn!("Skipping unreadable asset path {}", path.display());
                continue;
            };
            if !self.accepts(kind, &name) {
                continue;
            }
            assets.push(Asset {
                name,
                kind,
                origin: origin.clone(),
                path,
            });
        }
        assets.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(assets)
    }
}

/// All regular files beneath `dir`, recursively.
///
/// Hidden entries are pruned and symlinked directories are not descended
/// into. Symlinks to files are returned.
pub(crate) fn walk_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
    for entry in walker {
        match entry {
            Ok(entry) if entry.path().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => warn!("Skipping unreadable entry: {e}"),
        }
    }
    files
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
