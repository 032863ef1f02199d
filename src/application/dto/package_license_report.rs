use crate::license_resolution::domain::Resolution;
use crate::ports::outbound::PackageMetadata;

/// PackageLicenseReport - Result of resolving one package
///
/// Adapters format these into whatever output they produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLicenseReport {
    pub package: PackageMetadata,
    pub resolution: Resolution,
}

impl PackageLicenseReport {
    pub fn new(package: PackageMetadata, resolution: Resolution) -> Self {
        Self {
            package,
            resolution,
        }
    }

    /// Tab-separated line: package, id, name, outcome
    ///
    /// Missing values are written as `-`.
    pub fn to_tsv_line(&self) -> String {
        let license = self.resolution.license();
        format!(
            "{}\t{}\t{}\t{}",
            self.package.display_name(),
            license.and_then(|l| l.id()).unwrap_or("-"),
            license.and_then(|l| l.name()).unwrap_or("-"),
            self.resolution.outcome()
        )
    }
}
