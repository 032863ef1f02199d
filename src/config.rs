//! Configuration for spdx-url-resolver.
//!
//! [`ResolverConfig`] is what the resolution core consumes. The binary fills
//! it from an optional YAML file (`spdx-url-resolver.config.yml`) loaded
//! through [`load_config_from_path`] or [`discover_config`].

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::license_resolution::services::DEFAULT_REDIRECT_HOSTS;
use crate::shared::{ResolverError, Result};

pub const CONFIG_FILENAME: &str = "spdx-url-resolver.config.yml";

/// Canonical location of the SPDX license list
pub const DEFAULT_DATASET_URL: &str = "https://spdx.org/licenses/licenses.json";

pub const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Settings used by the resolver and its network adapters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub github_client_id: Option<String>,
    pub github_client_secret: Option<String>,
    pub github_api_base_url: String,
    pub dataset_url: String,
    pub redirect_hosts: Vec<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            github_client_id: None,
            github_client_secret: None,
            github_api_base_url: DEFAULT_GITHUB_API_BASE_URL.to_string(),
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            redirect_hosts: DEFAULT_REDIRECT_HOSTS.iter().map(|h| h.to_string()).collect(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            user_agent: format!("spdx-url-resolver/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ResolverConfig {
    /// Sets GitHub OAuth app credentials used to raise the API rate limit
    pub fn with_github_credentials(
        mut self,
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Self {
        self.github_client_id = client_id;
        self.github_client_secret = client_secret;
        self
    }

    pub fn with_github_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.github_api_base_url = url.into();
        self
    }

    pub fn with_dataset_url(mut self, url: impl Into<String>) -> Self {
        self.dataset_url = url.into();
        self
    }

    pub fn with_redirect_hosts(mut self, hosts: Vec<String>) -> Self {
        self.redirect_hosts = hosts;
        self
    }

    /// Applies every field present in `file` on top of these settings
    pub fn merge_file(mut self, file: &ConfigFile) -> Self {
        if let Some(github) = &file.github {
            if github.client_id.is_some() {
                self.github_client_id = github.client_id.clone();
            }
            if github.client_secret.is_some() {
                self.github_client_secret = github.client_secret.clone();
            }
            if let Some(url) = &github.api_base_url {
                self.github_api_base_url = url.clone();
            }
        }
        if let Some(url) = &file.dataset_url {
            self.dataset_url = url.clone();
        }
        if let Some(hosts) = &file.redirect_hosts {
            self.redirect_hosts = hosts.clone();
        }
        if let Some(seconds) = file.timeout_seconds {
            self.timeout = Duration::from_secs(seconds);
        }
        if let Some(user_agent) = &file.user_agent {
            self.user_agent = user_agent.clone();
        }
        self
    }
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub github: Option<GitHubSection>,
    pub dataset_url: Option<String>,
    pub redirect_hosts: Option<Vec<String>>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// GitHub API settings.
#[derive(Debug, Deserialize, Default)]
pub struct GitHubSection {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub api_base_url: Option<String>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    let invalid = |reason: String| ResolverError::InvalidConfig {
        path: path.to_path_buf(),
        reason,
    };

    if let Some(ref hosts) = config.redirect_hosts {
        for (i, host) in hosts.iter().enumerate() {
            if host.trim().is_empty() {
                return Err(invalid(format!("redirect_hosts[{}] must not be empty", i)).into());
            }
        }
    }

    if config.timeout_seconds == Some(0) {
        return Err(invalid("timeout_seconds must be greater than zero".to_string()).into());
    }

    for (field, value) in [
        ("dataset_url", config.dataset_url.as_deref()),
        (
            "github.api_base_url",
            config.github.as_ref().and_then(|g| g.api_base_url.as_deref()),
        ),
    ] {
        if let Some(value) = value {
            if url::Url::parse(value).is_err() {
                let reason = format!("{} is not an absolute URL: '{}'", field, value);
                return Err(invalid(reason).into());
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
    }
}
