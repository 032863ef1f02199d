pub mod catalog;
pub mod license;
pub mod resolution;
pub mod resolution_cache;

pub use catalog::{LicenseCatalog, EMBEDDED_DATASET};
pub use license::License;
pub use resolution::Resolution;
pub use resolution_cache::ResolutionCache;
