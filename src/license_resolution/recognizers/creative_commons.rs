use super::{host_is, LicenseRecognizer, Recognition};
use crate::license_resolution::domain::LicenseCatalog;
use url::Url;

const HOSTS: &[&str] = &["creativecommons.org", "www.creativecommons.org"];

/// Creative Commons deeds, matched by exact path
pub struct CreativeCommonsRecognizer;

impl CreativeCommonsRecognizer {
    fn id_for_path(path: &str) -> Option<&'static str> {
        let id = match path {
            "/licenses/by/1.0/" => "cc-by-1.0",
            "/licenses/by/2.0/" => "cc-by-2.0",
            "/licenses/by/2.5/" => "cc-by-2.5",
            "/licenses/by/3.0/" => "cc-by-3.0",
            "/licenses/by/4.0/" => "cc-by-4.0",
            "/licenses/by-sa/1.0/" => "cc-by-sa-1.0",
            "/licenses/by-sa/2.0/" => "cc-by-sa-2.0",
            "/licenses/by-sa/2.5/" => "cc-by-sa-2.5",
            "/licenses/by-sa/3.0/" => "cc-by-sa-3.0",
            "/licenses/by-sa/4.0/" => "cc-by-sa-4.0",
            "/licenses/by-nd/1.0/" => "cc-by-nd-1.0",
            "/licenses/by-nd/2.0/" => "cc-by-nd-2.0",
            "/licenses/by-nd/2.5/" => "cc-by-nd-2.5",
            "/licenses/by-nd/3.0/" => "cc-by-nd-3.0",
            "/licenses/by-nd/4.0/" => "cc-by-nd-4.0",
            "/licenses/by-nc/1.0/" => "cc-by-nc-1.0",
            "/licenses/by-nc/2.0/" => "cc-by-nc-2.0",
            "/licenses/by-nc/2.5/" => "cc-by-nc-2.5",
            "/licenses/by-nc/3.0/" => "cc-by-nc-3.0",
            "/licenses/by-nc/4.0/" => "cc-by-nc-4.0",
            "/licenses/by-nc-sa/1.0/" => "cc-by-nc-sa-1.0",
            "/licenses/by-nc-sa/2.0/" => "cc-by-nc-sa-2.0",
            "/licenses/by-nc-sa/2.5/" => "cc-by-nc-sa-2.5",
            "/licenses/by-nc-sa/3.0/" => "cc-by-nc-sa-3.0",
            "/licenses/by-nc-sa/4.0/" => "cc-by-nc-sa-4.0",
            // 1.0 used the by-nd-nc ordering
            "/licenses/by-nd-nc/1.0/" => "cc-by-nc-nd-1.0",
            "/licenses/by-nc-nd/2.0/" => "cc-by-nc-nd-2.0",
            "/licenses/by-nc-nd/2.5/" => "cc-by-nc-nd-2.5",
            "/licenses/by-nc-nd/3.0/" => "cc-by-nc-nd-3.0",
            "/licenses/by-nc-nd/4.0/" => "cc-by-nc-nd-4.0",
            "/publicdomain/zero/1.0/" => "cc0-1.0",
            _ => return None,
        };
        Some(id)
    }
}

impl LicenseRecognizer for CreativeCommonsRecognizer {
    fn name(&self) -> &'static str {
        "Creative Commons"
    }

    fn recognize(&self, url: &Url, _catalog: &LicenseCatalog) -> Recognition {
        if !host_is(url, HOSTS) {
            return Recognition::Pass;
        }

        let path = url.path();
        let id = if path.ends_with('/') {
            Self::id_for_path(path)
        } else {
            Self::id_for_path(&format!("{}/", path))
        };

        match id {
            Some(id) => Recognition::Candidate(id.to_string()),
            None => Recognition::Unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognize(s: &str) -> Recognition {
        let catalog = LicenseCatalog::empty();
        CreativeCommonsRecognizer.recognize(&Url::parse(s).unwrap(), &catalog)
    }

    fn candidate(id: &str) -> Recognition {
        Recognition::Candidate(id.to_string())
    }

    #[test]
    fn test_license_paths() {
        assert_eq!(
            recognize("https://creativecommons.org/licenses/by/4.0/"),
            candidate("cc-by-4.0")
        );
        assert_eq!(
            recognize("http://creativecommons.org/licenses/by-nc-sa/3.0/"),
            candidate("cc-by-nc-sa-3.0")
        );
        assert_eq!(
            recognize("https://www.creativecommons.org/licenses/by-nd-nc/1.0/"),
            candidate("cc-by-nc-nd-1.0")
        );
    }

    #[test]
    fn test_trailing_slash_is_optional() {
        assert_eq!(
            recognize("https://creativecommons.org/licenses/by-sa/2.5"),
            candidate("cc-by-sa-2.5")
        );
    }

    #[test]
    fn test_public_domain_dedication() {
        assert_eq!(
            recognize("https://creativecommons.org/publicdomain/zero/1.0/"),
            candidate("cc0-1.0")
        );
    }

    #[test]
    fn test_every_mapped_id_is_in_embedded_catalog() {
        let catalog = LicenseCatalog::embedded().unwrap();
        for kind in ["by", "by-sa", "by-nd", "by-nc", "by-nc-sa", "by-nc-nd"] {
            for version in ["1.0", "2.0", "2.5", "3.0", "4.0"] {
                let kind = if kind == "by-nc-nd" && version == "1.0" { "by-nd-nc" } else { kind };
                let path = format!("/licenses/{}/{}/", kind, version);
                let id = CreativeCommonsRecognizer::id_for_path(&path)
                    .unwrap_or_else(|| panic!("no entry for {}", path));
                assert!(catalog.get_ignore_case(id).is_some(), "{} missing from catalog", id);
            }
        }
    }

    #[test]
    fn test_unlisted_paths_are_unrecognized() {
        assert_eq!(
            recognize("https://creativecommons.org/licenses/by/4.0/legalcode"),
            Recognition::Unrecognized
        );
        assert_eq!(recognize("https://creativecommons.org/about/"), Recognition::Unrecognized);
    }

    #[test]
    fn test_other_hosts_pass() {
        assert_eq!(recognize("https://example.org/licenses/by/4.0/"), Recognition::Pass);
    }
}
