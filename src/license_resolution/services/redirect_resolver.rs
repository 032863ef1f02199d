use crate::ports::outbound::{HttpRequest, HttpTransport};
use std::collections::HashSet;
use std::sync::Arc;
use url::Url;

/// Shortener and redirect hosts followed by default
pub const DEFAULT_REDIRECT_HOSTS: &[&str] = &[
    "go.microsoft.com",
    "aka.ms",
    "bit.ly",
    "goo.gl",
    "tinyurl.com",
];

/// Follows redirects issued by known shortener hosts
///
/// The chain continues only while the current URL's host is on the
/// allow-list. There is no hop limit: a redirect cycle made entirely of
/// allow-listed hosts would not terminate.
pub struct RedirectResolver {
    transport: Arc<dyn HttpTransport>,
    hosts: HashSet<String>,
    user_agent: String,
}

impl RedirectResolver {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        hosts: impl IntoIterator<Item = impl AsRef<str>>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            hosts: hosts
                .into_iter()
                .map(|h| h.as_ref().trim().to_ascii_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
            user_agent: user_agent.into(),
        }
    }

    pub fn is_redirect_host(&self, url: &Url) -> bool {
        url.host_str()
            .map(|host| self.hosts.contains(&host.to_ascii_lowercase()))
            .unwrap_or(false)
    }

    /// Returns the final target of `url`, or `url` itself if its host is
    /// not a redirect host
    pub async fn resolve(&self, url: Url) -> Url {
        let mut current = url;
        while self.is_redirect_host(&current) {
            match self.next_location(&current).await {
                Some(next) => {
                    tracing::debug!("Redirect {} -> {}", current, next);
                    current = next;
                }
                None => break,
            }
        }
        current
    }

    async fn next_location(&self, url: &Url) -> Option<Url> {
        let request = HttpRequest::get(url.as_str())
            .header("User-Agent", self.user_agent.as_str())
            .without_redirects();

        let response = match self.transport.get(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Error occurred when resolving redirect '{}' ({:#})", url, e);
                return None;
            }
        };

        let Some(location) = response.header("location") else {
            tracing::debug!("No Location header from '{}' (status {})", url, response.status);
            return None;
        };

        match url.join(location.trim()) {
            Ok(next) => Some(next),
            Err(e) => {
                tracing::warn!("Invalid redirect location '{}' from '{}' ({})", location, url, e);
                None
            }
        }
    }
}
