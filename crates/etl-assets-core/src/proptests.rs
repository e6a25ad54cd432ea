//! Property-based tests for identifiers and path resolution.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Component;

    use crate::locator::{display_path, resolve, resolve_str};
    use crate::{AssetKind, AssetName, ProjectId};
    use proptest::prelude::*;

    fn kind() -> impl Strategy<Value = AssetKind> {
        prop_oneof![Just(AssetKind::Pipelines), Just(AssetKind::Scripts)]
    }

    proptest! {
        #[test]
        fn test_valid_ids_accepted(id in "[A-Za-z0-9][A-Za-z0-9_-]{0,63}") {
            let parsed = ProjectId::parse(&id).unwrap();
            prop_assert_eq!(parsed.as_str(), id.as_str());
        }

        #[test]
        fn test_ids_with_foreign_chars_rejected(
            prefix in "[a-z0-9]{0,8}",
            bad in "[^A-Za-z0-9_-]",
            suffix in "[a-z0-9]{0,8}",
        ) {
            let id = format!("{prefix}{bad}{suffix}");
            prop_assert!(ProjectId::parse(&id).is_err());
        }

        #[test]
        fn test_resolve_deterministic(id in "[a-z0-9][a-z0-9_-]{0,20}", kind in kind()) {
            let project = ProjectId::parse(&id).unwrap();
            let first = resolve(&project, kind);
            let second = resolve(&project, kind);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(resolve_str(&id, kind.dir_name()).unwrap(), first);
        }

        #[test]
        fn test_resolve_stays_inside_projects(id in "[A-Za-z0-9][A-Za-z0-9_-]{0,63}", kind in kind()) {
            let project = ProjectId::parse(&id).unwrap();
            let path = resolve(&project, kind);
            let components: Vec<Component<'_>> = path.components().collect();
            prop_assert_eq!(components.len(), 3);
            prop_assert!(components.iter().all(|c| matches!(c, Component::Normal(_))));
            prop_assert!(path.starts_with("projects"));
            prop_assert!(path.ends_with(kind.dir_name()));
        }

        #[test]
        fn test_display_path_matches_resolve(id in "[a-z0-9][a-z0-9_-]{0,20}", kind in kind()) {
            let project = ProjectId::parse(&id).unwrap();
            let shown = display_path(&project, kind);
            prop_assert!(shown.ends_with('/'));
            prop_assert_eq!(std::path::PathBuf::from(shown), resolve(&project, kind));
        }

        #[test]
        fn test_asset_name_never_escapes(segments in prop::collection::vec("[a-z0-9_.-]{1,8}", 1..4)) {
            let raw = segments.join("/");
            match AssetName::parse(&raw) {
                Ok(name) => {
                    prop_assert!(name
                        .to_path()
                        .components()
                        .all(|c| matches!(c, Component::Normal(_))));
                }
                Err(_) => prop_assert!(segments.iter().any(|s| s == "." || s == "..")),
            }
        }
    }
}
