//! Layout inspection over the fixture repository.

use etl_assets_core::{inspect, AssetsConfig, Severity};

use crate::common::AssetRepo;

#[test]
fn test_standard_repo_only_warns_about_legacy() {
    let repo = AssetRepo::standard();
    let report = inspect(&repo.locator(), &AssetsConfig::default()).unwrap();

    assert!(report.is_ok());
    assert_eq!(report.pipelines_checked, 2);
    assert_eq!(report.warning_count(), 1);
    assert!(report.findings[0].message.contains("legacy"));
}

#[test]
fn test_broken_pipeline_fails_inspection() {
    let repo = AssetRepo::standard();
    repo.write("projects/proj1/pipelines/broken.yml", "steps:\n  - [\n");

    let report = inspect(&repo.locator(), &AssetsConfig::default()).unwrap();
    assert!(!report.is_ok());
    let errors: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].path.ends_with("broken.yml"));
}

#[test]
fn test_custom_extensions_limit_checked_pipelines() {
    let repo = AssetRepo::standard();
    repo.write("projects/shared/pipelines/draft.yml", "steps: [\n");
    let config = AssetsConfig {
        pipeline_extensions: vec!["yaml".to_string()],
        ..AssetsConfig::default()
    };

    let report = inspect(&repo.locator(), &config).unwrap();
    assert!(report.is_ok());
    assert_eq!(report.pipelines_checked, 2);
}

#[test]
fn test_report_serializes() {
    let repo = AssetRepo::empty();
    let report = inspect(&repo.locator(), &AssetsConfig::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["projects"][0], "shared");
    assert_eq!(json["findings"].as_array().unwrap().len(), 0);
}
