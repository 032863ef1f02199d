use spdx_url_resolver::prelude::*;

/// Mock PackageMetadataProvider for testing
pub struct MockPackageMetadataProvider {
    pub packages: Vec<PackageMetadata>,
    pub should_fail: bool,
}

impl MockPackageMetadataProvider {
    pub fn new() -> Self {
        Self {
            packages: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_package(mut self, package: PackageMetadata) -> Self {
        self.packages.push(package);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            packages: Vec::new(),
            should_fail: true,
        }
    }
}

impl Default for MockPackageMetadataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageMetadataProvider for MockPackageMetadataProvider {
    fn packages(&self) -> Result<Vec<PackageMetadata>> {
        if self.should_fail {
            anyhow::bail!("Mock package metadata provider failure");
        }
        Ok(self.packages.clone())
    }
}
