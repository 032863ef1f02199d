use crate::license_resolution::domain::{License, LicenseCatalog, Resolution};
use crate::ports::outbound::{HostLookup, HttpRequest, HttpResponse, HttpTransport, RepositoryHost};
use async_trait::async_trait;
use base64::Engine;
use chrono::{DateTime, Local};
use serde::Deserialize;
use std::sync::Arc;
use url::Url;

const WEB_HOSTS: &[&str] = &["github.com", "www.github.com"];
const RAW_HOST: &str = "raw.githubusercontent.com";
const LEGACY_RAW_HOST: &str = "raw.github.com";
const ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug, Default, Deserialize)]
struct LicenseResponse {
    #[serde(default)]
    license: Option<LicenseInfo>,
    #[serde(default)]
    html_url: Option<String>,
    #[serde(default)]
    download_url: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LicenseInfo {
    #[serde(default)]
    spdx_id: Option<String>,
}

/// License endpoint answer, with whether the call went through cleanly
#[derive(Debug)]
struct LicenseMetadata {
    response: LicenseResponse,
    cacheable: bool,
}

/// OAuth app credentials sent with API requests to raise the rate limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubCredentials {
    client_id: String,
    client_secret: String,
}

impl GitHubCredentials {
    /// Returns `None` unless both values are present and non-blank
    pub fn new(client_id: Option<String>, client_secret: Option<String>) -> Option<Self> {
        match (client_id, client_secret) {
            (Some(id), Some(secret)) if !id.trim().is_empty() && !secret.trim().is_empty() => {
                Some(Self {
                    client_id: id,
                    client_secret: secret,
                })
            }
            _ => None,
        }
    }
}

/// Owner/repository pair named by a GitHub URL, plus the specific file it
/// points at, if any
#[derive(Debug, PartialEq, Eq)]
struct RepositoryTarget {
    owner: String,
    repo: String,
    file: Option<Url>,
}

/// GitHubRepositoryHost adapter for the repository license API
///
/// Handles `github.com` web URLs and `raw.githubusercontent.com` content
/// URLs. The legacy `raw.github.com` host is rewritten by
/// [`normalize`](RepositoryHost::normalize) before lookup.
pub struct GitHubRepositoryHost {
    transport: Arc<dyn HttpTransport>,
    api_base_url: String,
    credentials: Option<GitHubCredentials>,
    user_agent: String,
}

impl GitHubRepositoryHost {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        api_base_url: impl Into<String>,
        credentials: Option<GitHubCredentials>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            credentials,
            user_agent: user_agent.into(),
        }
    }

    fn license_api_url(&self, target: &RepositoryTarget) -> String {
        let mut url = format!(
            "{}/repos/{}/{}/license",
            self.api_base_url,
            urlencoding::encode(&target.owner),
            urlencoding::encode(&target.repo)
        );
        if let Some(credentials) = &self.credentials {
            url.push_str(&format!(
                "?client_id={}&client_secret={}",
                urlencoding::encode(&credentials.client_id),
                urlencoding::encode(&credentials.client_secret)
            ));
        }
        url
    }

    /// Queries the license endpoint
    ///
    /// A transport error or an error status other than 404 leaves the
    /// metadata non-cacheable.
    async fn fetch_license_metadata(&self, target: &RepositoryTarget) -> LicenseMetadata {
        let url = self.license_api_url(target);
        let request = HttpRequest::get(url.as_str())
            .header("User-Agent", self.user_agent.as_str())
            .header("Accept", ACCEPT);

        let response = match self.transport.get(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    "Error occurred when downloading {}/{} license ({:#})",
                    target.owner,
                    target.repo,
                    e
                );
                return LicenseMetadata {
                    response: LicenseResponse::default(),
                    cacheable: false,
                };
            }
        };

        log_rate_limit(&response);

        let mut cacheable = true;
        if !response.is_success() && !response.is_not_found() {
            tracing::warn!(
                "Response from '{}/repos/{}/{}/license' is not success status code ({})",
                self.api_base_url,
                target.owner,
                target.repo,
                response.status
            );
            cacheable = false;
        }

        let body = if response.body.trim().is_empty() {
            LicenseResponse::default()
        } else {
            serde_json::from_str(&response.body).unwrap_or_else(|e| {
                tracing::debug!(
                    "Unreadable license API body for {}/{} ({})",
                    target.owner,
                    target.repo,
                    e
                );
                LicenseResponse::default()
            })
        };

        LicenseMetadata {
            response: body,
            cacheable,
        }
    }

    /// Downloads the exact file the caller pointed at
    async fn fetch_file(
        &self,
        file: &Url,
        id: Option<String>,
        name: Option<String>,
        cacheable: bool,
    ) -> HostLookup {
        let Some(raw_url) = to_raw_url(file) else {
            tracing::debug!("No raw-content equivalent for '{}'", file);
            return HostLookup::degraded(Resolution::Resolved(License::inferred(id, name)));
        };

        let request =
            HttpRequest::get(raw_url.as_str()).header("User-Agent", self.user_agent.as_str());
        let response = match self.transport.get(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Error occurred when downloading '{}' ({:#})", file, e);
                return HostLookup::degraded(Resolution::FetchFailed);
            }
        };

        let (text, file_ok) = if response.is_success() {
            (Some(response.body), true)
        } else {
            tracing::warn!(
                "Response from '{}' is not success status code ({})",
                raw_url,
                response.status
            );
            (None, false)
        };

        let license = License::inferred(id, name)
            .with_text(text)
            .with_download_uri(Some(raw_url));
        HostLookup {
            resolution: Resolution::Resolved(license),
            cacheable: cacheable && file_ok,
        }
    }
}

#[async_trait]
impl RepositoryHost for GitHubRepositoryHost {
    fn normalize(&self, url: &Url) -> Url {
        let mut normalized = url.clone();
        if url
            .host_str()
            .is_some_and(|host| host.eq_ignore_ascii_case(LEGACY_RAW_HOST))
            && normalized.set_host(Some(RAW_HOST)).is_err()
        {
            return url.clone();
        }
        normalized
    }

    async fn lookup(&self, url: &Url, catalog: &LicenseCatalog) -> HostLookup {
        let Some(target) = parse_target(url) else {
            tracing::debug!("Not a GitHub repository URL: {}", url);
            return HostLookup::complete(Resolution::Unrecognized);
        };

        let LicenseMetadata {
            response: metadata,
            cacheable,
        } = self.fetch_license_metadata(&target).await;

        let Some(info) = metadata.license else {
            if let Some(message) = metadata.message.as_deref() {
                if message != "Not Found" {
                    tracing::warn!("GitHub API result message: '{}'", message);
                }
            }
            return match &target.file {
                Some(file) => self.fetch_file(file, None, None, cacheable).await,
                None if !cacheable => HostLookup::degraded(Resolution::FetchFailed),
                None => HostLookup::complete(Resolution::NotFound),
            };
        };

        let id = info.spdx_id;
        let name = id.as_deref().and_then(|id| catalog.name_of(id));

        let canonical = match &target.file {
            None => true,
            Some(file) => [&metadata.html_url, &metadata.download_url]
                .iter()
                .any(|candidate| candidate.as_deref() == Some(file.as_str())),
        };

        match target.file {
            Some(file) if !canonical => self.fetch_file(&file, id, name, cacheable).await,
            _ => {
                let text = metadata.content.as_deref().and_then(decode_content);
                let download_uri = metadata
                    .download_url
                    .as_deref()
                    .and_then(|u| Url::parse(u).ok());
                let license = License::inferred(id, name)
                    .with_text(text)
                    .with_download_uri(download_uri);
                HostLookup {
                    resolution: Resolution::Resolved(license),
                    cacheable,
                }
            }
        }
    }
}

fn parse_target(url: &Url) -> Option<RepositoryTarget> {
    let host = url.host_str()?.to_ascii_lowercase();
    let is_raw = host == RAW_HOST;
    if !is_raw && !WEB_HOSTS.contains(&host.as_str()) {
        return None;
    }

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    if segments.len() < 2 {
        return None;
    }

    let repo = segments[1].strip_suffix(".git").unwrap_or(segments[1]);
    if repo.is_empty() {
        return None;
    }

    let file = if is_raw || segments.len() > 2 {
        Some(url.clone())
    } else {
        None
    };

    Some(RepositoryTarget {
        owner: segments[0].to_string(),
        repo: repo.to_string(),
        file,
    })
}

/// Maps a file URL to its raw-content form
///
/// Raw URLs are returned as-is; `/{owner}/{repo}/blob/{branch}/{path}` web
/// views are rewritten. Anything else has no raw equivalent.
fn to_raw_url(url: &Url) -> Option<Url> {
    if url.host_str().is_some_and(|h| h.eq_ignore_ascii_case(RAW_HOST)) {
        return Some(url.clone());
    }

    let segments: Vec<&str> = url.path_segments()?.collect();
    match segments.as_slice() {
        [owner, repo, "blob", branch, path @ ..]
            if !path.is_empty() && path.iter().any(|s| !s.is_empty()) =>
        {
            Url::parse(&format!(
                "https://{}/{}/{}/{}/{}",
                RAW_HOST,
                owner,
                repo,
                branch,
                path.join("/")
            ))
            .ok()
        }
        _ => None,
    }
}

fn decode_content(content: &str) -> Option<String> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    match base64::engine::general_purpose::STANDARD.decode(compact.as_bytes()) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            tracing::warn!("Failed to decode license content ({})", e);
            None
        }
    }
}

fn log_rate_limit(response: &HttpResponse) {
    let remaining = response
        .header("x-ratelimit-remaining")
        .and_then(|v| v.trim().parse::<u64>().ok());
    if remaining != Some(0) {
        return;
    }

    let reset = response
        .header("x-ratelimit-reset")
        .and_then(|v| v.trim().parse::<i64>().ok())
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0));
    match reset {
        Some(reset) => tracing::error!(
            "GitHub API rate limit exceeded (Reset: {})",
            reset.with_timezone(&Local)
        ),
        None => tracing::error!("GitHub API rate limit exceeded"),
    }
}
