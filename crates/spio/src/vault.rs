use crate::prelude::*;
use std::path::{Path, PathBuf};

/// Write generated code to `<vault_dir>/<filename>`, creating the directory
/// if needed. Returns the path written.
pub async fn write_to_vault(
    vault_dir: &Path,
    code: &str,
    filename: &str,
) -> Result<PathBuf, Error> {
    tokio::fs::create_dir_all(vault_dir)
        .await
        .map_err(|e| Error::Persistence(format!("cannot create vault directory: {e}")))?;

    let filepath = vault_dir.join(filename);

    tokio::fs::write(&filepath, code)
        .await
        .map_err(|e| Error::Persistence(format!("cannot write {filename}: {e}")))?;

    Ok(filepath)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let vault_dir = temp_dir.path().join("vault").join("raw-experiments");

        let filepath = write_to_vault(&vault_dir, "export {};", "a_20240101_000000.ts")
            .await
            .unwrap();

        assert_eq!(filepath, vault_dir.join("a_20240101_000000.ts"));
        assert_eq!(std::fs::read_to_string(&filepath).unwrap(), "export {};");
    }

    #[tokio::test]
    async fn test_content_is_written_exactly() {
        let temp_dir = TempDir::new().unwrap();
        let code = "const s = \"héllo ✓\";\n\n\t// trailing whitespace   ";

        let filepath = write_to_vault(temp_dir.path(), code, "unicode.tsx")
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(filepath).unwrap(), code);
    }

    #[tokio::test]
    async fn test_existing_file_is_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        write_to_vault(temp_dir.path(), "old", "same.tsx").await.unwrap();

        let filepath = write_to_vault(temp_dir.path(), "new", "same.tsx")
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(filepath).unwrap(), "new");
    }

    #[tokio::test]
    async fn test_vault_path_blocked_by_file_is_persistence_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("vault");
        std::fs::write(&blocker, "not a directory").unwrap();

        let result = write_to_vault(&blocker.join("nested"), "x", "x.tsx").await;
        assert!(matches!(result, Err(Error::Persistence(_))));
    }
}
