use crate::license_resolution::domain::{LicenseCatalog, Resolution};
use async_trait::async_trait;
use url::Url;

/// Result of asking a hosting platform about a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLookup {
    pub resolution: Resolution,
    /// False if any network failure occurred while producing `resolution`.
    /// Only cacheable `Resolved` lookups are remembered.
    pub cacheable: bool,
}

impl HostLookup {
    pub fn complete(resolution: Resolution) -> Self {
        Self {
            resolution,
            cacheable: true,
        }
    }

    pub fn degraded(resolution: Resolution) -> Self {
        Self {
            resolution,
            cacheable: false,
        }
    }
}

/// RepositoryHost port for source-hosting platforms
///
/// This port abstracts a platform's repository-license API (e.g. GitHub)
/// used as the fallback when no recognizer claims a URL.
///
/// # Async Support
/// Implementations must be `Send + Sync` so one resolver can serve
/// concurrent callers.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Rewrites legacy host aliases to their current form
    ///
    /// The returned URL is the cache key for this lookup.
    fn normalize(&self, url: &Url) -> Url {
        url.clone()
    }

    /// Resolves a URL on this platform
    ///
    /// # Arguments
    /// * `url` - A URL already passed through [`normalize`](Self::normalize)
    /// * `catalog` - Used to attach display names to inferred SPDX ids
    ///
    /// # Returns
    /// `Resolution::Unrecognized` for URLs that are not in the platform's
    /// repository URL shape. Never an error: failures are logged and
    /// reported through the lookup.
    async fn lookup(&self, url: &Url, catalog: &LicenseCatalog) -> HostLookup;
}
