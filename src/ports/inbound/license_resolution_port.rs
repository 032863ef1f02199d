use crate::license_resolution::domain::Resolution;
use crate::ports::outbound::PackageMetadata;
use crate::shared::Result;
use async_trait::async_trait;

/// LicenseResolutionPort - Inbound port for license inference
///
/// This port defines the interface that external adapters (CLI, build
/// tooling, package managers) use to turn license URLs into SPDX licenses.
/// It represents the application's public API.
#[async_trait]
pub trait LicenseResolutionPort: Send + Sync {
    /// Resolves a single license URL
    ///
    /// Malformed or relative URLs yield `Resolution::Unrecognized`. Network
    /// failures are logged and reported through the returned variant; this
    /// never fails.
    async fn resolve(&self, url: &str) -> Resolution;

    /// Resolves a package from its license URL, falling back to its project URL
    ///
    /// # Errors
    /// Returns an error if the package metadata is unusable (empty name).
    async fn resolve_package(&self, package: &PackageMetadata) -> Result<Resolution>;

    /// Reloads the catalog from the remote dataset
    ///
    /// Returns the number of licenses in the catalog afterwards. On failure
    /// the previous catalog is kept.
    async fn refresh(&self) -> usize;
}
