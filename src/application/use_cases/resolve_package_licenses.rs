use crate::application::dto::PackageLicenseReport;
use crate::ports::inbound::LicenseResolutionPort;
use crate::ports::outbound::PackageMetadataProvider;
use crate::shared::Result;
use futures::stream::{self, StreamExt, TryStreamExt};

/// Default number of packages resolved at once
pub const DEFAULT_CONCURRENCY: usize = 4;

/// ResolvePackageLicensesUseCase - resolves every package a provider lists
///
/// # Type Parameters
/// * `P` - PackageMetadataProvider implementation
/// * `R` - LicenseResolutionPort implementation
///
/// Packages are resolved with bounded concurrency; reports come back in the
/// provider's order.
pub struct ResolvePackageLicensesUseCase<P, R> {
    provider: P,
    resolver: R,
    concurrency: usize,
}

impl<P, R> ResolvePackageLicensesUseCase<P, R>
where
    P: PackageMetadataProvider,
    R: LicenseResolutionPort,
{
    pub fn new(provider: P, resolver: R) -> Self {
        Self {
            provider,
            resolver,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Sets how many packages may be in flight at once (at least one)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Returns an error if the provider fails or a package has unusable
    /// metadata. Resolution failures are not errors; they are reported
    /// through each report's `resolution`.
    pub async fn execute(&self) -> Result<Vec<PackageLicenseReport>> {
        let packages = self.provider.packages()?;
        tracing::info!("Resolving licenses for {} packages", packages.len());

        let reports: Vec<PackageLicenseReport> = stream::iter(packages)
            .map(|package| async move {
                let resolution = self.resolver.resolve_package(&package).await?;
                Ok::<_, anyhow::Error>(PackageLicenseReport::new(package, resolution))
            })
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        let resolved = reports.iter().filter(|r| r.resolution.is_resolved()).count();
        tracing::info!("Resolved {} of {} packages", resolved, reports.len());

        Ok(reports)
    }
}
