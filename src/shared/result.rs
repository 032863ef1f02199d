/// Crate-wide Result type.
///
/// Recoverable resolution failures never surface through this type; they are
/// logged and reported as a [`Resolution`](crate::license_resolution::domain::Resolution)
/// variant. Only contract violations, dataset parse failures and configuration
/// errors are returned as `Err`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
