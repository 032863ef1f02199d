//! Domain-specific URL recognizers
//!
//! Each recognizer inspects a URL and either passes (the host is not its
//! concern), proposes a candidate SPDX id, or claims the URL without being
//! able to map it. The [`RecognizerChain`] asks them in order and stops at the
//! first recognizer that does not pass.

mod apache;
mod catalog_url;
mod creative_commons;
mod gnu;
mod open_source;

pub use apache::ApacheRecognizer;
pub use catalog_url::CatalogUrlRecognizer;
pub use creative_commons::CreativeCommonsRecognizer;
pub use gnu::GnuRecognizer;
pub use open_source::OpenSourceRecognizer;

use crate::license_resolution::domain::{License, LicenseCatalog};
use url::Url;

/// What a recognizer concluded about a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition {
    /// Not handled here; ask the next recognizer.
    Pass,
    /// Candidate SPDX id, looked up case-insensitively in the catalog.
    Candidate(String),
    /// The host is handled here but the path does not name a known license.
    Unrecognized,
}

/// A rule mapping URLs on a specific host to a candidate license id
pub trait LicenseRecognizer: Send + Sync {
    /// Name used in log messages
    fn name(&self) -> &'static str;

    fn recognize(&self, url: &Url, catalog: &LicenseCatalog) -> Recognition;
}

/// Result of running the whole chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainOutcome {
    /// A catalog entry matched. Text has not been fetched yet.
    Matched(License),
    /// A recognizer claimed the URL but no license could be named.
    Unrecognized,
    /// Every recognizer passed; the URL belongs to the fallback.
    NoMatch,
}

/// Ordered collection of recognizers
pub struct RecognizerChain {
    recognizers: Vec<Box<dyn LicenseRecognizer>>,
}

impl RecognizerChain {
    pub fn new(recognizers: Vec<Box<dyn LicenseRecognizer>>) -> Self {
        Self { recognizers }
    }

    /// The fixed order: exact catalog URL first, then the per-host rules.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(CatalogUrlRecognizer),
            Box::new(GnuRecognizer),
            Box::new(ApacheRecognizer),
            Box::new(OpenSourceRecognizer),
            Box::new(CreativeCommonsRecognizer),
        ])
    }

    /// Appends a recognizer after the existing ones
    pub fn push(&mut self, recognizer: Box<dyn LicenseRecognizer>) {
        self.recognizers.push(recognizer);
    }

    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }

    pub fn recognize(&self, url: &Url, catalog: &LicenseCatalog) -> ChainOutcome {
        for recognizer in &self.recognizers {
            match recognizer.recognize(url, catalog) {
                Recognition::Pass => continue,
                Recognition::Unrecognized => {
                    tracing::debug!("{} recognizer could not map {}", recognizer.name(), url);
                    return ChainOutcome::Unrecognized;
                }
                Recognition::Candidate(id) => {
                    return match catalog.get_ignore_case(&id) {
                        Some(license) => {
                            tracing::debug!(
                                "{} recognizer matched {} to {}",
                                recognizer.name(),
                                url,
                                license.id().unwrap_or(&id)
                            );
                            ChainOutcome::Matched(license)
                        }
                        None => {
                            tracing::warn!("Unknown license id '{}' ({})", id, url);
                            ChainOutcome::Unrecognized
                        }
                    };
                }
            }
        }
        ChainOutcome::NoMatch
    }
}

impl Default for RecognizerChain {
    fn default() -> Self {
        Self::standard()
    }
}

/// True if the URL's host is one of `hosts` (exact, case-insensitive)
pub(crate) fn host_is(url: &Url, hosts: &[&str]) -> bool {
    url.host_str()
        .map(|host| hosts.iter().any(|h| host.eq_ignore_ascii_case(h)))
        .unwrap_or(false)
}

/// Lowercased last path component with a trailing slash and a page
/// extension (`.html`, `.htm`, `.txt`, `.php`) removed
pub(crate) fn path_slug(rest: &str) -> String {
    let trimmed = rest.trim_end_matches('/');
    let lower = trimmed.to_lowercase();
    [".html", ".htm", ".txt", ".php"]
        .iter()
        .find_map(|ext| lower.strip_suffix(ext))
        .map(str::to_string)
        .unwrap_or(lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::log_capture::CapturedLogs;

    struct FixedRecognizer(Recognition);

    impl LicenseRecognizer for FixedRecognizer {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn recognize(&self, _url: &Url, _catalog: &LicenseCatalog) -> Recognition {
            self.0.clone()
        }
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_path_slug() {
        assert_eq!(path_slug("gpl.html"), "gpl");
        assert_eq!(path_slug("MIT-License.php"), "mit-license");
        assert_eq!(path_slug("Apache-2.0/"), "apache-2.0");
        assert_eq!(path_slug("lgpl-2.1.txt"), "lgpl-2.1");
        assert_eq!(path_slug("cddl1"), "cddl1");
    }

    #[test]
    fn test_host_is_case_insensitive() {
        assert!(host_is(&url("https://WWW.GNU.org/licenses/"), &["www.gnu.org"]));
        assert!(!host_is(&url("https://gnu.org.evil.com/"), &["gnu.org"]));
    }

    #[test]
    fn test_chain_stops_at_first_non_pass() {
        let catalog = LicenseCatalog::embedded().unwrap();
        let chain = RecognizerChain::new(vec![
            Box::new(FixedRecognizer(Recognition::Pass)),
            Box::new(FixedRecognizer(Recognition::Candidate("mit".to_string()))),
            Box::new(FixedRecognizer(Recognition::Candidate("isc".to_string()))),
        ]);
        match chain.recognize(&url("https://example.com/"), &catalog) {
            ChainOutcome::Matched(license) => assert_eq!(license.id(), Some("MIT")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_chain_no_match_when_all_pass() {
        let catalog = LicenseCatalog::embedded().unwrap();
        let chain = RecognizerChain::new(vec![Box::new(FixedRecognizer(Recognition::Pass))]);
        assert_eq!(
            chain.recognize(&url("https://example.com/"), &catalog),
            ChainOutcome::NoMatch
        );
    }

    #[test]
    fn test_chain_unknown_candidate_warns() {
        let catalog = LicenseCatalog::embedded().unwrap();
        let chain = RecognizerChain::new(vec![Box::new(FixedRecognizer(Recognition::Candidate(
            "not-a-license".to_string(),
        )))]);

        let (outcome, logs) = CapturedLogs::capture(tracing::Level::WARN, || {
            chain.recognize(&url("https://example.com/"), &catalog)
        });

        assert_eq!(outcome, ChainOutcome::Unrecognized);
        let output = logs.contents();
        assert!(output.contains("WARN"));
        assert!(output.contains("not-a-license"));
    }

    #[test]
    fn test_appended_recognizer_runs_last() {
        let catalog = LicenseCatalog::embedded().unwrap();
        let mut chain = RecognizerChain::standard();
        chain.push(Box::new(FixedRecognizer(Recognition::Candidate("zlib".to_string()))));
        assert_eq!(chain.len(), 6);

        // handled by the GNU rule before the appended recognizer is asked
        match chain.recognize(&url("https://www.gnu.org/licenses/gpl.html"), &catalog) {
            ChainOutcome::Matched(license) => assert_eq!(license.id(), Some("GPL-3.0")),
            other => panic!("unexpected outcome: {:?}", other),
        }
        match chain.recognize(&url("https://example.com/"), &catalog) {
            ChainOutcome::Matched(license) => assert_eq!(license.id(), Some("Zlib")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
