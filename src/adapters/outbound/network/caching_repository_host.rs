use crate::license_resolution::domain::{LicenseCatalog, Resolution, ResolutionCache};
use crate::ports::outbound::{HostLookup, RepositoryHost};
use async_trait::async_trait;
use url::Url;

/// CachingRepositoryHost wraps a RepositoryHost and remembers its successes.
///
/// This adapter implements the decorator pattern to add caching to any
/// RepositoryHost implementation. Only `Resolved` lookups produced without a
/// network failure are stored; anything else is recomputed on the next call.
///
/// The cache is keyed by the normalized URL and is shared with the resolver,
/// which clears it when the catalog is refreshed.
pub struct CachingRepositoryHost<H: RepositoryHost> {
    inner: H,
    cache: ResolutionCache,
}

impl<H: RepositoryHost> CachingRepositoryHost<H> {
    /// Creates a caching host storing results in `cache`
    pub fn new(inner: H, cache: ResolutionCache) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }
}

#[async_trait]
impl<H: RepositoryHost> RepositoryHost for CachingRepositoryHost<H> {
    fn normalize(&self, url: &Url) -> Url {
        self.inner.normalize(url)
    }

    async fn lookup(&self, url: &Url, catalog: &LicenseCatalog) -> HostLookup {
        // Check cache first
        if let Some(cached) = self.cache.get(url.as_str()) {
            tracing::debug!("Resolution cache hit for {}", url);
            return HostLookup::complete(Resolution::Resolved(cached));
        }

        let lookup = self.inner.lookup(url, catalog).await;

        if lookup.cacheable {
            if let Resolution::Resolved(license) = &lookup.resolution {
                self.cache.insert(url.as_str(), license.clone());
            }
        }

        lookup
    }
}
