use crate::license_resolution::domain::License;
use crate::ports::outbound::{HttpRequest, HttpTransport};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct LicenseDetails {
    #[serde(rename = "licenseText", default)]
    license_text: Option<String>,
}

/// Retrieves full license text from an SPDX details document
pub struct TextFetcher {
    transport: Arc<dyn HttpTransport>,
    user_agent: String,
}

impl TextFetcher {
    pub fn new(transport: Arc<dyn HttpTransport>, user_agent: impl Into<String>) -> Self {
        Self {
            transport,
            user_agent: user_agent.into(),
        }
    }

    /// Sets `license.text` from its download URI
    ///
    /// Does nothing if the text is already present or there is no download
    /// URI. Failures are logged and leave the text unset.
    pub async fn fill_text(&self, license: &mut License) {
        if license.text().is_some() {
            return;
        }
        let Some(uri) = license.download_uri().cloned() else {
            return;
        };

        let label = license.id().unwrap_or("<unknown>").to_string();
        let request = HttpRequest::get(uri.as_str()).header("User-Agent", self.user_agent.as_str());

        let response = match self.transport.get(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Error occurred when downloading {} text ({:#})", label, e);
                return;
            }
        };

        if !response.is_success() {
            tracing::warn!(
                "Response from '{}' is not success status code ({})",
                uri,
                response.status
            );
            return;
        }

        match serde_json::from_str::<LicenseDetails>(&response.body) {
            Ok(details) => match details.license_text {
                Some(text) => license.set_text(Some(text)),
                None => tracing::debug!("No licenseText in details for {}", label),
            },
            Err(e) => tracing::warn!("Failed to parse license details for {} ({})", label, e),
        }
    }
}
