/// Use cases module containing application business logic orchestration
mod resolve_license;
mod resolve_package_licenses;

pub use resolve_license::LicenseResolver;
pub use resolve_package_licenses::{ResolvePackageLicensesUseCase, DEFAULT_CONCURRENCY};
