use crate::config::ResolverConfig;
use crate::license_resolution::domain::{License, LicenseCatalog, Resolution, ResolutionCache};
use crate::license_resolution::recognizers::{ChainOutcome, LicenseRecognizer, RecognizerChain};
use crate::license_resolution::services::{RedirectResolver, TextFetcher};
use crate::ports::inbound::LicenseResolutionPort;
use crate::ports::outbound::{HttpRequest, HttpTransport, PackageMetadata, RepositoryHost};
use crate::shared::{ResolverError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// LicenseResolver - infers SPDX licenses from URLs
///
/// Owns the license catalog and the repository-host resolution cache. A URL
/// goes through the redirect resolver, then the recognizer chain, and, if no
/// recognizer claims its host, the repository host.
///
/// The repository host is expected to consult `cache` (see
/// `CachingRepositoryHost`); the resolver only clears it on refresh.
pub struct LicenseResolver {
    catalog: LicenseCatalog,
    cache: ResolutionCache,
    chain: RecognizerChain,
    redirects: RedirectResolver,
    text_fetcher: TextFetcher,
    host: Box<dyn RepositoryHost>,
    transport: Arc<dyn HttpTransport>,
    dataset_url: String,
    user_agent: String,
}

impl LicenseResolver {
    /// Creates a resolver with the standard recognizer chain
    ///
    /// `cache` must be the cache `host` reads and writes, or `refresh` will
    /// not invalidate host results. Built through `ResolverFactory`.
    pub(crate) fn new(
        catalog: LicenseCatalog,
        cache: ResolutionCache,
        host: Box<dyn RepositoryHost>,
        transport: Arc<dyn HttpTransport>,
        config: &ResolverConfig,
    ) -> Self {
        Self {
            catalog,
            cache,
            chain: RecognizerChain::standard(),
            redirects: RedirectResolver::new(
                transport.clone(),
                &config.redirect_hosts,
                config.user_agent.as_str(),
            ),
            text_fetcher: TextFetcher::new(transport.clone(), config.user_agent.as_str()),
            host,
            transport,
            dataset_url: config.dataset_url.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Appends a recognizer after the standard ones
    pub fn with_recognizer(mut self, recognizer: Box<dyn LicenseRecognizer>) -> Self {
        self.chain.push(recognizer);
        self
    }

    pub fn catalog(&self) -> &LicenseCatalog {
        &self.catalog
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    /// Resolves a license URL
    ///
    /// Blank, malformed and relative URLs are `Unrecognized`.
    pub async fn resolve(&self, url: &str) -> Resolution {
        match parse_absolute(url) {
            Some(url) => self.resolve_url(url).await,
            None => {
                tracing::debug!("Skipping non-absolute license URL '{}'", url);
                Resolution::Unrecognized
            }
        }
    }

    pub async fn resolve_url(&self, url: Url) -> Resolution {
        if self.catalog.is_empty() {
            tracing::info!("License catalog is empty, refreshing before resolving {}", url);
            self.refresh().await;
            if self.catalog.is_empty() {
                return Resolution::FetchFailed;
            }
        }

        let target = self.redirects.resolve(url).await;

        let resolution = match self.chain.recognize(&target, &self.catalog) {
            ChainOutcome::Matched(license) => Resolution::Resolved(self.with_text(license).await),
            ChainOutcome::Unrecognized => Resolution::Unrecognized,
            ChainOutcome::NoMatch => {
                let normalized = self.host.normalize(&target);
                self.host.lookup(&normalized, &self.catalog).await.resolution
            }
        };

        tracing::debug!("{} -> {} ({})", target, resolution, resolution.outcome());
        resolution
    }

    /// Fills text for a catalog entry and remembers it on the entry
    async fn with_text(&self, mut license: License) -> License {
        if license.text().is_some() || !license.is_master() {
            return license;
        }
        self.text_fetcher.fill_text(&mut license).await;
        if let (Some(id), Some(text)) = (license.id(), license.text()) {
            self.catalog.store_text(id, text);
        }
        license
    }

    /// Resolves a package from its license URL, then its project URL
    ///
    /// Returns the first `Resolved` outcome, otherwise the outcome of the
    /// last URL tried (`Unrecognized` if the package has no usable URL).
    pub async fn resolve_package(&self, package: &PackageMetadata) -> Result<Resolution> {
        if package.name.trim().is_empty() {
            return Err(ResolverError::InvalidPackageMetadata {
                package: package.display_name(),
                reason: "Package name is empty".to_string(),
            }
            .into());
        }

        let mut last = Resolution::Unrecognized;
        for url in [package.license_url.as_deref(), package.project_url.as_deref()]
            .into_iter()
            .flatten()
        {
            let Some(url) = parse_absolute(url) else {
                tracing::debug!("{}: skipping non-absolute URL '{}'", package.display_name(), url);
                continue;
            };
            let resolution = self.resolve_url(url).await;
            if resolution.is_resolved() {
                return Ok(resolution);
            }
            last = resolution;
        }

        tracing::debug!("{}: no license resolved ({})", package.display_name(), last.outcome());
        Ok(last)
    }

    /// Reloads the catalog from the configured dataset URL
    ///
    /// On success the resolution cache is cleared. Failures are logged and
    /// keep the previous catalog. Returns the catalog size afterwards.
    pub async fn refresh(&self) -> usize {
        let request = HttpRequest::get(self.dataset_url.as_str())
            .header("User-Agent", self.user_agent.as_str());

        match self.transport.get(&request).await {
            Err(e) => {
                tracing::error!(
                    "Error occurred when downloading license dataset from '{}' ({:#})",
                    self.dataset_url,
                    e
                );
            }
            Ok(response) if !response.is_success() => {
                tracing::error!(
                    "Response from '{}' is not success status code ({})",
                    self.dataset_url,
                    response.status
                );
            }
            Ok(response) => match self.catalog.load(&response.body) {
                Ok(count) => {
                    self.cache.clear();
                    tracing::info!("Loaded {} licenses from {}", count, self.dataset_url);
                }
                Err(e) => {
                    tracing::error!("{:#}", e);
                }
            },
        }

        self.catalog.len()
    }

    /// Empties the catalog and the resolution cache
    ///
    /// The next resolution refreshes the catalog from the network.
    pub fn clear(&self) {
        self.catalog.clear();
        self.cache.clear();
    }
}

#[async_trait]
impl LicenseResolutionPort for LicenseResolver {
    async fn resolve(&self, url: &str) -> Resolution {
        LicenseResolver::resolve(self, url).await
    }

    async fn resolve_package(&self, package: &PackageMetadata) -> Result<Resolution> {
        LicenseResolver::resolve_package(self, package).await
    }

    async fn refresh(&self) -> usize {
        LicenseResolver::refresh(self).await
    }
}

fn parse_absolute(url: &str) -> Option<Url> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }
    Url::parse(trimmed).ok()
}
