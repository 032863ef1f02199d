use crate::adapters::outbound::network::{
    CachingRepositoryHost, GitHubCredentials, GitHubRepositoryHost, ReqwestTransport,
};
use crate::application::use_cases::LicenseResolver;
use crate::config::ResolverConfig;
use crate::license_resolution::domain::{LicenseCatalog, ResolutionCache};
use crate::ports::outbound::{HttpTransport, RepositoryHost};
use crate::shared::Result;
use std::sync::Arc;

/// Factory for wiring a LicenseResolver to its network adapters
///
/// The GitHub host is wrapped in a caching decorator that shares its
/// resolution cache with the resolver, so a catalog refresh clears it.
pub struct ResolverFactory;

impl ResolverFactory {
    /// Creates a resolver that talks to the network through reqwest
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built or the embedded
    /// dataset fails to parse.
    pub fn create(config: &ResolverConfig) -> Result<LicenseResolver> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout, &config.user_agent)?);
        Self::create_with_transport(transport, config)
    }

    /// Creates a resolver over any transport, starting from the embedded catalog
    pub fn create_with_transport(
        transport: Arc<dyn HttpTransport>,
        config: &ResolverConfig,
    ) -> Result<LicenseResolver> {
        Ok(Self::create_with_catalog(transport, config, LicenseCatalog::embedded()?))
    }

    pub fn create_with_catalog(
        transport: Arc<dyn HttpTransport>,
        config: &ResolverConfig,
        catalog: LicenseCatalog,
    ) -> LicenseResolver {
        let github = GitHubRepositoryHost::new(
            transport.clone(),
            config.github_api_base_url.as_str(),
            GitHubCredentials::new(
                config.github_client_id.clone(),
                config.github_client_secret.clone(),
            ),
            config.user_agent.as_str(),
        );
        Self::create_with_host(transport, config, catalog, github)
    }

    /// Creates a resolver whose fallback is `host` instead of GitHub
    ///
    /// The host is wrapped in a caching decorator over the resolver's own
    /// cache.
    pub fn create_with_host<H: RepositoryHost + 'static>(
        transport: Arc<dyn HttpTransport>,
        config: &ResolverConfig,
        catalog: LicenseCatalog,
        host: H,
    ) -> LicenseResolver {
        let cache = ResolutionCache::new();
        let host = CachingRepositoryHost::new(host, cache.clone());

        LicenseResolver::new(catalog, cache, Box::new(host), transport, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DATASET_URL;
    use crate::license_resolution::domain::{License, Resolution, EMBEDDED_DATASET};
    use crate::ports::outbound::{HostLookup, HttpResponse};
    use crate::shared::stub_transport::StubTransport;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use url::Url;

    struct CountingHost {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RepositoryHost for CountingHost {
        async fn lookup(&self, _url: &Url, _catalog: &LicenseCatalog) -> HostLookup {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let license = License::inferred(Some("MIT".to_string()), None);
            HostLookup::complete(Resolution::Resolved(license))
        }
    }

    #[tokio::test]
    async fn test_github_results_are_cached_in_resolver_cache() {
        let body = serde_json::json!({
            "html_url": "https://github.com/octo/widget/blob/main/LICENSE",
            "download_url": "https://raw.githubusercontent.com/octo/widget/main/LICENSE",
            "content": "SVNDIExpY2Vuc2U=",
            "license": { "spdx_id": "ISC" }
        })
        .to_string();
        let transport = Arc::new(StubTransport::new().respond(
            "https://api.github.com/repos/octo/widget/license",
            HttpResponse::new(200, body),
        ));
        let resolver =
            ResolverFactory::create_with_transport(transport.clone(), &ResolverConfig::default())
                .unwrap();

        let first = resolver.resolve("https://github.com/octo/widget").await;
        let second = resolver.resolve("https://github.com/octo/widget").await;

        assert_eq!(first, second);
        assert_eq!(first.license().unwrap().name(), Some("ISC License"));
        assert_eq!(first.license().unwrap().text(), Some("ISC License"));
        assert_eq!(transport.request_count(), 1);
        assert_eq!(resolver.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_configured_api_base_url_is_used() {
        let transport = Arc::new(StubTransport::new());
        let config =
            ResolverConfig::default().with_github_api_base_url("https://ghe.example.com/api/v3");
        let resolver = ResolverFactory::create_with_transport(transport.clone(), &config).unwrap();

        let resolution = resolver.resolve("https://github.com/octo/widget").await;

        assert_eq!(resolution, Resolution::NotFound);
        assert_eq!(
            transport.requests()[0].url,
            "https://ghe.example.com/api/v3/repos/octo/widget/license"
        );
    }

    #[tokio::test]
    async fn test_custom_host_shares_the_cache_refresh_clears() {
        let transport = Arc::new(
            StubTransport::new()
                .respond(DEFAULT_DATASET_URL, HttpResponse::new(200, EMBEDDED_DATASET)),
        );
        let calls = Arc::new(AtomicUsize::new(0));
        let resolver = ResolverFactory::create_with_host(
            transport,
            &ResolverConfig::default(),
            LicenseCatalog::embedded().unwrap(),
            CountingHost {
                calls: calls.clone(),
            },
        );
        let url = "https://git.example.com/octo/widget";

        resolver.resolve(url).await;
        resolver.resolve(url).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(resolver.cache().len(), 1);

        resolver.refresh().await;
        assert!(resolver.cache().is_empty());

        let resolution = resolver.resolve(url).await;
        assert_eq!(resolution.license().and_then(License::id), Some("MIT"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_create_builds_reqwest_resolver() {
        let resolver = ResolverFactory::create(&ResolverConfig::default()).unwrap();
        assert!(!resolver.catalog().is_empty());
    }
}
