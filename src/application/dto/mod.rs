/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod package_license_report;

pub use package_license_report::PackageLicenseReport;
