//! spdx-url-resolver - infers SPDX licenses from package license URLs
//!
//! Given the license URL or project URL a package declares, this library
//! determines the SPDX identifier, display name and full text of its license.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_resolution`): license catalog, URL recognizers,
//!   redirect following and text retrieval
//! - **Application Layer** (`application`): the `LicenseResolver` use case and
//!   batch package resolution
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): reqwest transport, GitHub repository host,
//!   package list readers
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use spdx_url_resolver::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let resolver = ResolverFactory::create(&ResolverConfig::default())?;
//!
//! let resolution = resolver.resolve("https://www.apache.org/licenses/LICENSE-2.0").await;
//! if let Some(license) = resolution.license() {
//!     println!("{} ({})", license.id().unwrap_or("-"), license.name().unwrap_or("-"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::network::{
        CachingRepositoryHost, GitHubCredentials, GitHubRepositoryHost, ReqwestTransport,
    };
    pub use crate::adapters::outbound::package_sources::{JsonPackageListReader, UrlListProvider};
    pub use crate::application::dto::PackageLicenseReport;
    pub use crate::application::factories::ResolverFactory;
    pub use crate::application::use_cases::{LicenseResolver, ResolvePackageLicensesUseCase};
    pub use crate::config::ResolverConfig;
    pub use crate::license_resolution::domain::{
        License, LicenseCatalog, Resolution, ResolutionCache,
    };
    pub use crate::license_resolution::recognizers::{
        LicenseRecognizer, Recognition, RecognizerChain,
    };
    pub use crate::ports::inbound::LicenseResolutionPort;
    pub use crate::ports::outbound::{
        HostLookup, HttpRequest, HttpResponse, HttpTransport, PackageMetadata,
        PackageMetadataProvider, RepositoryHost,
    };
    pub use crate::shared::{ResolverError, Result};
}
