use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Filesystem-backed storage. Read paths resolve as given (relative to the
/// working directory or absolute); writes land under the storage root.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(path)?;
        Ok(data)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_back_what_it_wrote() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().to_str().unwrap().to_string();
        let storage = LocalStorage::new(base.clone());

        storage.write_file("nested/out.csv", b"id,x\n").unwrap();

        let on_disk = format!("{}/nested/out.csv", base);
        assert_eq!(storage.read_file(&on_disk).unwrap(), b"id,x\n");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let storage = LocalStorage::new(".".to_string());
        assert!(storage.read_file("does-not-exist.json").is_err());
    }
}
