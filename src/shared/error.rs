use std::path::PathBuf;
use thiserror::Error;

/// Errors the resolver reports to its caller.
///
/// Everything else (network failures, unknown URLs, rate limiting) is logged
/// and folded into a `Resolution` instead of being raised.
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("Failed to parse license dataset\nDetails: {details}\n\n💡 Hint: The dataset must have the shape {{\"licenses\": [{{\"licenseId\": ..., \"name\": ..., \"seeAlso\": [...]}}]}}")]
    DatasetParse { details: String },

    #[error("Invalid package metadata for '{package}'\nReason: {reason}\n\n💡 Hint: Every package needs a non-empty name")]
    InvalidPackageMetadata { package: String, reason: String },

    #[error("Invalid config: {path}\nReason: {reason}\n\n💡 Hint: Check the config file against the documented fields")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("Failed to read package list: {path}\nDetails: {details}\n\n💡 Hint: Expected a JSON array of {{\"name\", \"license_url\", \"project_url\"}} objects")]
    PackageListReadError { path: PathBuf, details: String },
}
