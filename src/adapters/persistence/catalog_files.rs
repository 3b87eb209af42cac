//! File output for the catalog export. Atomic replace for every file written.

use crate::domain::DomainError;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Write `contents` to `path` via temp file, fsync, rename.
///
/// Readers never observe a half-written file.
pub async fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), DomainError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| DomainError::Export(format!("create dir {}: {}", parent.display(), e)))?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let mut f = fs::File::create(&temp_path)
        .await
        .map_err(|e| DomainError::Export(format!("create temp file: {}", e)))?;
    f.write_all(contents)
        .await
        .map_err(|e| DomainError::Export(format!("write temp file: {}", e)))?;
    f.sync_all()
        .await
        .map_err(|e| DomainError::Export(format!("sync temp file: {}", e)))?;
    drop(f);

    fs::rename(&temp_path, path)
        .await
        .map_err(|e| DomainError::Export(format!("atomic rename failed: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_atomic_replaces_and_cleans_temp() {
        let dir = std::env::temp_dir().join(format!("hvut-atomic-{}", std::process::id()));
        let path = dir.join("nested").join("out.json");

        write_atomic(&path, b"first").await.unwrap();
        write_atomic(&path, b"second").await.unwrap();

        assert_eq!(fs::read_to_string(&path).await.unwrap(), "second");
        assert!(!dir.join("nested").join("out.json.tmp").exists());
        let _ = fs::remove_dir_all(&dir).await;
    }
}
