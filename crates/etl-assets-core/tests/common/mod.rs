//! Common fixtures for etl-assets-core integration tests.

use std::path::{Path, PathBuf};

use etl_assets_core::{AssetLocator, AssetsConfig, Catalog};
use tempfile::TempDir;

/// Temporary asset repository.
///
/// Mirrors the layout after the migration from research-etl: shared
/// pipelines and scripts under `projects/shared/`, plus the leftover
/// root-level `scripts/` directory.
pub struct AssetRepo {
    dir: TempDir,
}

impl AssetRepo {
    /// Creates an empty repository with only `projects/shared/`.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("projects/shared/pipelines")).unwrap();
        std::fs::create_dir_all(dir.path().join("projects/shared/scripts")).unwrap();
        Self { dir }
    }

    /// Creates the standard fixture repository.
    pub fn standard() -> Self {
        let repo = Self::empty();
        repo.write(
            "projects/shared/pipelines/yanroy_fields.yaml",
            "name: yanroy_fields\nsteps:\n  - script: yanroy/build_tiles_of_interest.py\n",
        );
        repo.write(
            "projects/shared/scripts/yanroy/build_tiles_of_interest.py",
            "# tiles\n",
        );
        repo.write(
            "projects/shared/scripts/yanroy/build_google_maps_field_keys.py",
            "# keys\n",
        );
        repo.write(
            "projects/shared/scripts/yanroy/build_vector_tiles_with_tippecanoe.py",
            "# vector tiles\n",
        );
        repo.write(
            "projects/proj1/pipelines/yanroy_fields.yaml",
            "name: yanroy_fields\nregion: midwest\n",
        );
        repo.write("projects/proj1/scripts/local_only.sh", "#!/bin/sh\n");
        repo.write("scripts/yanroy/build_field_polygons_ndjson.py", "# legacy\n");
        repo
    }

    /// Repository root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file relative to the root, creating parents.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Locator anchored at the root.
    pub fn locator(&self) -> AssetLocator {
        AssetLocator::new(self.root())
    }

    /// Catalog with default settings.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.locator(), &AssetsConfig::default())
    }
}
