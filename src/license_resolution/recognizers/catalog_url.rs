use super::{LicenseRecognizer, Recognition};
use crate::license_resolution::domain::LicenseCatalog;
use url::Url;

/// Exact match against the "see also" URLs of the SPDX dataset
pub struct CatalogUrlRecognizer;

impl LicenseRecognizer for CatalogUrlRecognizer {
    fn name(&self) -> &'static str {
        "catalog URL"
    }

    fn recognize(&self, url: &Url, catalog: &LicenseCatalog) -> Recognition {
        match catalog.get_by_url(url).and_then(|license| license.id().map(str::to_string)) {
            Some(id) => Recognition::Candidate(id),
            None => Recognition::Pass,
        }
    }
}
