use super::License;
use dashmap::DashMap;
use std::sync::Arc;

/// Remembers successful repository-host resolutions by URL
///
/// Keys are the URL the repository host was asked about, not the caller's
/// input string: shortener redirects are already followed, the host's
/// `normalize` has run (so `raw.github.com` is stored under
/// `raw.githubusercontent.com`), and the URL is in `Url`'s serialized form
/// with a lowercased scheme and host.
///
/// Cloning the cache yields another handle to the same table, so the
/// caching adapter and the resolver that clears it share one store.
/// Entries live until [`clear`](Self::clear); there is no eviction.
#[derive(Debug, Clone, Default)]
pub struct ResolutionCache {
    entries: Arc<DashMap<String, License>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the cached license for `url`
    pub fn get(&self, url: &str) -> Option<License> {
        self.entries.get(url).map(|entry| entry.value().clone())
    }

    /// Stores `license` under `url`, replacing any previous entry
    pub fn insert(&self, url: &str, license: License) {
        self.entries.insert(url.to_string(), license);
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn license(id: &str) -> License {
        License::inferred(Some(id.to_string()), None).with_text(Some("terms".to_string()))
    }

    #[test]
    fn test_get_returns_independent_snapshots() {
        let cache = ResolutionCache::new();
        cache.insert("https://github.com/a/b", license("MIT"));

        let mut first = cache.get("https://github.com/a/b").unwrap();
        first.set_text(Some("edited".to_string()));
        let second = cache.get("https://github.com/a/b").unwrap();

        assert_eq!(second.text(), Some("terms"));
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = ResolutionCache::new();
        let handle = cache.clone();
        handle.insert("https://github.com/a/b", license("MIT"));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(handle.is_empty());
    }

    #[test]
    fn test_last_writer_wins() {
        let cache = ResolutionCache::new();
        cache.insert("https://github.com/a/b", license("MIT"));
        cache.insert("https://github.com/a/b", license("ISC"));
        assert_eq!(cache.get("https://github.com/a/b").unwrap().id(), Some("ISC"));
        assert_eq!(cache.len(), 1);
    }
}
