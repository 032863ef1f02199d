use crate::ports::outbound::{PackageMetadata, PackageMetadataProvider};
use crate::shared::Result;

/// Treats each bare URL as an anonymous package whose license URL it is
///
/// Used for URLs given directly on the command line.
pub struct UrlListProvider {
    urls: Vec<String>,
}

impl UrlListProvider {
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls }
    }
}

impl PackageMetadataProvider for UrlListProvider {
    fn packages(&self) -> Result<Vec<PackageMetadata>> {
        Ok(self
            .urls
            .iter()
            .map(|url| PackageMetadata::new(url.as_str()).with_license_url(url.as_str()))
            .collect())
    }
}
