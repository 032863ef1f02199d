use super::{host_is, LicenseRecognizer, Recognition};
use crate::license_resolution::domain::LicenseCatalog;
use url::Url;

const HOSTS: &[&str] = &["apache.org", "www.apache.org"];

/// `www.apache.org/licenses/LICENSE-<version>`
pub struct ApacheRecognizer;

impl ApacheRecognizer {
    fn id_for_version(version: &str) -> Option<&'static str> {
        match version {
            "2.0" => Some("apache-2.0"),
            "1.1" => Some("apache-1.1"),
            "1.0" => Some("apache-1.0"),
            _ => None,
        }
    }

    fn version(path: &str) -> Option<&str> {
        let rest = path.strip_prefix("/licenses/")?.trim_end_matches('/');
        let rest = rest
            .strip_suffix(".html")
            .or_else(|| rest.strip_suffix(".txt"))
            .unwrap_or(rest);
        const PREFIX: &str = "LICENSE-";
        let prefix = rest.get(..PREFIX.len())?;
        if !prefix.eq_ignore_ascii_case(PREFIX) {
            return None;
        }
        rest.get(PREFIX.len()..)
    }
}

impl LicenseRecognizer for ApacheRecognizer {
    fn name(&self) -> &'static str {
        "Apache"
    }

    fn recognize(&self, url: &Url, _catalog: &LicenseCatalog) -> Recognition {
        if !host_is(url, HOSTS) {
            return Recognition::Pass;
        }

        let Some(version) = Self::version(url.path()) else {
            return Recognition::Unrecognized;
        };

        match Self::id_for_version(version) {
            Some(id) => Recognition::Candidate(id.to_string()),
            None => {
                tracing::warn!("Unknown Apache license version '{}' ({})", version, url);
                Recognition::Unrecognized
            }
        }
    }
}
