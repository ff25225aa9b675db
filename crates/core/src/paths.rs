//! Path resolution for the vault and project root.

use std::path::{Component, Path, PathBuf};

/// Join `relative` onto `base` and collapse `.` and `..` without touching
/// the filesystem. Absolute `relative` paths replace `base`.
pub fn resolve_relative(base: &Path, relative: &Path) -> PathBuf {
    normalize(&base.join(relative))
}

/// Lexically normalize a path.
///
/// `..` above the root is dropped, matching how `/..` resolves on Unix.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = match normalized.components().next_back() {
                    Some(Component::Normal(_)) => normalized.pop(),
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => true,
                    _ => false,
                };
                if !popped {
                    normalized.push("..");
                }
            }
            Component::Normal(part) => normalized.push(part),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_parent_relative_vault() {
        let resolved = resolve_relative(
            Path::new("/srv/spio/2-backend-vault"),
            Path::new("../vault/raw-experiments"),
        );
        assert_eq!(resolved, PathBuf::from("/srv/spio/vault/raw-experiments"));
    }

    #[test]
    fn test_resolve_absolute_replaces_base() {
        let resolved = resolve_relative(Path::new("/srv/spio"), Path::new("/data/vault"));
        assert_eq!(resolved, PathBuf::from("/data/vault"));
    }

    #[test]
    fn test_normalize_dot_components() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
    }

    #[test]
    fn test_normalize_relative_keeps_leading_parents() {
        assert_eq!(normalize(Path::new("../../x")), PathBuf::from("../../x"));
        assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
    }
}
