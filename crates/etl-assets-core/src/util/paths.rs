//! Generic path utilities: tilde expansion and marker search.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading tilde are returned unchanged.
///
/// ```
/// use etl_assets_core::util::paths::expand_tilde;
///
/// assert_eq!(expand_tilde("/srv/etl"), std::path::PathBuf::from("/srv/etl"));
/// ```
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Walk up from `start` to the first ancestor containing `marker`.
///
/// `start` itself is checked first. The marker may be a nested relative
/// path such as `projects/shared`.
pub fn find_dir_with_marker(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).exists())
        .map(Path::to_path_buf)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_expand_tilde_plain_path() {
        assert_eq!(expand_tilde("relative/dir"), PathBuf::from("relative/dir"));
    }

    #[test]
    fn test_expand_tilde_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/etl"), home.join("etl"));
        }
    }

    #[test]
    fn test_find_dir_with_marker_in_start() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("projects/shared")).unwrap();

        let found = find_dir_with_marker(temp.path(), "projects/shared").unwrap();
        assert_eq!(found, temp.path());
    }

    #[test]
    fn test_find_dir_with_marker_in_ancestor() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("projects")).unwrap();
        let nested = temp.path().join("projects/proj1/scripts/yanroy");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_dir_with_marker(&nested, "projects").unwrap();
        assert_eq!(found, temp.path());
    }

    #[test]
    fn test_find_dir_with_marker_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_dir_with_marker(temp.path(), "definitely-not-a-marker-xyz").is_none());
    }
}
