use super::{host_is, path_slug, LicenseRecognizer, Recognition};
use crate::license_resolution::domain::LicenseCatalog;
use url::Url;

const HOSTS: &[&str] = &["gnu.org", "www.gnu.org"];

/// `www.gnu.org/licenses/<slug>` and `www.gnu.org/copyleft/<slug>`
pub struct GnuRecognizer;

impl GnuRecognizer {
    fn licenses_alias(slug: &str) -> &str {
        match slug {
            "gpl" => "gpl-3.0",
            "lgpl" => "lgpl-3.0",
            "agpl" => "agpl-3.0",
            other => other,
        }
    }

    fn copyleft_alias(slug: &str) -> &str {
        match slug {
            "gpl" => "gpl-3.0",
            "lgpl" | "lesser" => "lgpl-3.0",
            other => other,
        }
    }
}

impl LicenseRecognizer for GnuRecognizer {
    fn name(&self) -> &'static str {
        "GNU"
    }

    fn recognize(&self, url: &Url, _catalog: &LicenseCatalog) -> Recognition {
        if !host_is(url, HOSTS) {
            return Recognition::Pass;
        }

        let path = url.path();
        let candidate = if let Some(rest) = path.strip_prefix("/licenses/") {
            // older versions live under /licenses/old-licenses/
            let rest = rest.strip_prefix("old-licenses/").unwrap_or(rest);
            let slug = path_slug(rest);
            Self::licenses_alias(&slug).to_string()
        } else if let Some(rest) = path.strip_prefix("/copyleft/") {
            let slug = path_slug(rest);
            Self::copyleft_alias(&slug).to_string()
        } else {
            return Recognition::Unrecognized;
        };

        if candidate.is_empty() || candidate.contains('/') {
            return Recognition::Unrecognized;
        }
        Recognition::Candidate(candidate)
    }
}
