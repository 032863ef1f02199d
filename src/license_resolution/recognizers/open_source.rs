use super::{host_is, path_slug, LicenseRecognizer, Recognition};
use crate::license_resolution::domain::LicenseCatalog;
use url::Url;

const HOSTS: &[&str] = &["opensource.org", "www.opensource.org"];

/// `opensource.org/licenses/<slug>`
///
/// The slug is usually the SPDX id itself; the alias table covers the
/// historical page names that differ from it.
pub struct OpenSourceRecognizer;

impl OpenSourceRecognizer {
    fn alias(slug: &str) -> &str {
        match slug {
            "mit-license" => "mit",
            "bsd-license" => "bsd-2-clause",
            "bsd-3-clause-license" => "bsd-3-clause",
            "isc-license" => "isc",
            "apache2.0" => "apache-2.0",
            "cddl1" => "cddl-1.0",
            "cpl1.0" => "cpl-1.0",
            "eclipse-1.0" => "epl-1.0",
            "rpl1.5" => "rpl-1.5",
            "artistic-license-2.0" => "artistic-2.0",
            "zlib-license" => "zlib",
            other => other,
        }
    }
}

impl LicenseRecognizer for OpenSourceRecognizer {
    fn name(&self) -> &'static str {
        "opensource.org"
    }

    fn recognize(&self, url: &Url, _catalog: &LicenseCatalog) -> Recognition {
        if !host_is(url, HOSTS) {
            return Recognition::Pass;
        }

        // the current site uses /license/<slug>, older pages /licenses/<slug>
        let path = url.path();
        let Some(rest) = path
            .strip_prefix("/licenses/")
            .or_else(|| path.strip_prefix("/license/"))
        else {
            return Recognition::Unrecognized;
        };

        let slug = path_slug(rest);
        if slug.is_empty() || slug.contains('/') {
            return Recognition::Unrecognized;
        }
        Recognition::Candidate(Self::alias(&slug).to_string())
    }
}
