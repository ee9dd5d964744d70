use crate::core::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// 以目前工作目錄為根
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DashboardError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_file_relative_to_base() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("data.csv"), b"Make,Model,Year,Rating\n").unwrap();

        let storage = LocalStorage::new(dir.path());
        let data = storage.read_file("data.csv").await.unwrap();
        assert_eq!(data, b"Make,Model,Year,Rating\n");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        let err = storage.read_file("nope.csv").await.unwrap_err();
        assert!(matches!(err, DashboardError::IoError(_)));
    }
}
