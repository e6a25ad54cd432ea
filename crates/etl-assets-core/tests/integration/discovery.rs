//! Root discovery and configuration against a real tree.

use etl_assets_core::{AssetKind, AssetsConfig, ProjectId, RootResolver};

use crate::common::AssetRepo;

#[test]
fn test_discovers_root_from_nested_script_dir() {
    let repo = AssetRepo::standard();
    let nested = repo.root().join("projects/shared/scripts/yanroy");

    let root = RootResolver::new()
        .with_search_start(&nested)
        .resolve()
        .unwrap();
    assert_eq!(root, repo.root());
}

#[test]
fn test_config_root_feeds_locator() {
    let repo = AssetRepo::standard();
    let path = repo.write(
        "etl-assets.toml",
        &format!("root = {:?}\nlegacy_fallback = false\n", repo.root().display().to_string()),
    );

    let config = AssetsConfig::from_file(&path).unwrap();
    let root = RootResolver::new()
        .with_explicit(config.root.as_deref())
        .resolve()
        .unwrap();
    let locator = etl_assets_core::AssetLocator::new(root);

    assert!(locator.exists(&ProjectId::shared(), AssetKind::Pipelines));
    assert!(!config.legacy_fallback);
}

#[test]
fn test_projects_listing() {
    let repo = AssetRepo::standard();
    let projects = repo.locator().projects().unwrap();
    let names: Vec<&str> = projects.iter().map(ProjectId::as_str).collect();
    assert_eq!(names, vec!["proj1", "shared"]);
}
