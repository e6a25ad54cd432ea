//! Fallback lookup across project, shared and legacy namespaces.

use etl_assets_core::{AssetKind, AssetName, Error, Origin, ProjectId};

use crate::common::AssetRepo;

fn id(s: &str) -> ProjectId {
    ProjectId::parse(s).unwrap()
}

fn name(s: &str) -> AssetName {
    AssetName::parse(s).unwrap()
}

#[test]
fn test_project_pipeline_shadows_shared() {
    let repo = AssetRepo::standard();
    let asset = repo
        .catalog()
        .find(&id("proj1"), AssetKind::Pipelines, &name("yanroy_fields.yaml"))
        .unwrap();
    assert_eq!(asset.origin, Origin::Project(id("proj1")));
    let content = std::fs::read_to_string(&asset.path).unwrap();
    assert!(content.contains("midwest"));
}

#[test]
fn test_shared_script_visible_to_project() {
    let repo = AssetRepo::standard();
    let asset = repo
        .catalog()
        .find(
            &id("proj1"),
            AssetKind::Scripts,
            &name("yanroy/build_tiles_of_interest.py"),
        )
        .unwrap();
    assert_eq!(asset.origin, Origin::Shared);
    assert_eq!(
        asset.path,
        repo.root()
            .join("projects/shared/scripts/yanroy/build_tiles_of_interest.py")
    );
}

#[test]
fn test_legacy_script_found_last() {
    let repo = AssetRepo::standard();
    let asset = repo
        .catalog()
        .find(
            &ProjectId::shared(),
            AssetKind::Scripts,
            &name("yanroy/build_field_polygons_ndjson.py"),
        )
        .unwrap();
    assert_eq!(asset.origin, Origin::Legacy);
}

#[test]
fn test_project_script_not_visible_to_other_projects() {
    let repo = AssetRepo::standard();
    let err = repo
        .catalog()
        .find(&id("proj2"), AssetKind::Scripts, &name("local_only.sh"))
        .unwrap_err();
    assert!(matches!(err, Error::AssetNotFound { ref project, .. } if project == "proj2"));
}

#[test]
fn test_merged_listing_for_project() {
    let repo = AssetRepo::standard();
    let assets = repo
        .catalog()
        .list_merged(&id("proj1"), AssetKind::Scripts)
        .unwrap();
    let got: Vec<(String, String)> = assets
        .iter()
        .map(|a| (a.name.to_string(), a.origin.to_string()))
        .collect();
    assert_eq!(
        got,
        vec![
            ("local_only.sh".to_string(), "project:proj1".to_string()),
            (
                "yanroy/build_field_polygons_ndjson.py".to_string(),
                "legacy".to_string()
            ),
            (
                "yanroy/build_google_maps_field_keys.py".to_string(),
                "shared".to_string()
            ),
            (
                "yanroy/build_tiles_of_interest.py".to_string(),
                "shared".to_string()
            ),
            (
                "yanroy/build_vector_tiles_with_tippecanoe.py".to_string(),
                "shared".to_string()
            ),
        ]
    );
}

#[test]
fn test_asset_serializes_for_consumers() {
    let repo = AssetRepo::standard();
    let asset = repo
        .catalog()
        .find(&id("proj1"), AssetKind::Pipelines, &name("yanroy_fields.yaml"))
        .unwrap();
    let json = serde_json::to_value(&asset).unwrap();
    assert_eq!(json["name"], "yanroy_fields.yaml");
    assert_eq!(json["kind"], "pipelines");
    assert_eq!(json["origin"], "project:proj1");
}
