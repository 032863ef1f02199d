use crate::ports::outbound::{PackageMetadata, PackageMetadataProvider};
use crate::shared::error::ResolverError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum package list size (16 MB)
const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// JsonPackageListReader adapter reading package metadata from a JSON file
///
/// The file holds an array of objects with a required `name` and optional
/// `version`, `license_url` and `project_url` fields.
pub struct JsonPackageListReader {
    path: PathBuf,
}

impl JsonPackageListReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_error(&self, details: impl Into<String>) -> anyhow::Error {
        ResolverError::PackageListReadError {
            path: self.path.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Reads the file, rejecting symlinks, non-regular files and oversized input
    fn safe_read(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path).map_err(|e| self.read_error(e.to_string()))?;

        if metadata.is_symlink() {
            return Err(self.read_error("symbolic links are not allowed"));
        }
        if !metadata.is_file() {
            return Err(self.read_error("not a regular file"));
        }
        if metadata.len() > MAX_FILE_SIZE {
            return Err(self.read_error(format!(
                "file is too large ({} bytes, maximum {} bytes)",
                metadata.len(),
                MAX_FILE_SIZE
            )));
        }

        fs::read_to_string(path).map_err(|e| self.read_error(e.to_string()))
    }
}

impl PackageMetadataProvider for JsonPackageListReader {
    fn packages(&self) -> Result<Vec<PackageMetadata>> {
        let content = self.safe_read(&self.path)?;
        let packages: Vec<PackageMetadata> =
            serde_json::from_str(&content).map_err(|e| self.read_error(e.to_string()))?;
        tracing::debug!("Read {} packages from {}", packages.len(), self.path.display());
        Ok(packages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_package_list() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("packages.json");
        fs::write(
            &path,
            r#"[
  {"name": "Newtonsoft.Json", "version": "13.0.1", "license_url": "https://licenses.nuget.org/MIT"},
  {"name": "widget", "project_url": "https://github.com/octo/widget"}
]"#,
        )
        .unwrap();

        let packages = JsonPackageListReader::new(&path).packages().unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].display_name(), "Newtonsoft.Json@13.0.1");
        assert_eq!(packages[0].license_url.as_deref(), Some("https://licenses.nuget.org/MIT"));
        assert_eq!(packages[1].project_url.as_deref(), Some("https://github.com/octo/widget"));
        assert_eq!(packages[1].license_url, None);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = JsonPackageListReader::new(temp_dir.path().join("missing.json")).packages();

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read package list"));
        assert!(err_string.contains("missing.json"));
    }

    #[test]
    fn test_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = JsonPackageListReader::new(temp_dir.path()).packages();

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("not a regular file"));
    }

    #[test]
    fn test_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("packages.json");
        fs::write(&path, r#"{"name": "not-an-array"}"#).unwrap();

        let result = JsonPackageListReader::new(&path).packages();

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read package list"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        fs::write(&target, "[]").unwrap();
        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = JsonPackageListReader::new(&link).packages();

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("symbolic links are not allowed"));
    }
}
