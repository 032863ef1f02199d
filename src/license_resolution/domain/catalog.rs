use super::License;
use crate::shared::{ResolverError, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use url::Url;

/// SPDX license list snapshot compiled into the binary
pub const EMBEDDED_DATASET: &str = include_str!("../../../data/licenses.json");

#[derive(Debug, Deserialize)]
struct LicenseDataset {
    licenses: Vec<DatasetEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetEntry {
    license_id: String,
    name: String,
    #[serde(default)]
    details_url: Option<String>,
    #[serde(default)]
    see_also: Vec<String>,
}

/// The three lookup tables built from one dataset.
#[derive(Debug, Default)]
struct CatalogIndex {
    by_id: HashMap<String, License>,
    /// lowercase id -> exact id
    by_lowercase_id: HashMap<String, String>,
    /// normalized URL -> exact id
    by_url: HashMap<String, String>,
}

impl CatalogIndex {
    fn build(dataset: LicenseDataset) -> Self {
        let mut index = CatalogIndex::default();
        let mut ambiguous: HashSet<String> = HashSet::new();

        for entry in &dataset.licenses {
            let license = License::master(
                &entry.license_id,
                &entry.name,
                entry.details_url.as_deref(),
            );
            index
                .by_lowercase_id
                .insert(entry.license_id.to_lowercase(), entry.license_id.clone());
            index.by_id.insert(entry.license_id.clone(), license);
        }

        for entry in &dataset.licenses {
            for see_also in &entry.see_also {
                let Some(key) = normalize_url(see_also) else {
                    continue;
                };
                match index.by_url.get(&key) {
                    Some(existing) if existing != &entry.license_id => {
                        ambiguous.insert(key);
                    }
                    Some(_) => {}
                    None => {
                        index.by_url.insert(key, entry.license_id.clone());
                    }
                }
            }
        }

        for key in &ambiguous {
            index.by_url.remove(key);
        }
        if !ambiguous.is_empty() {
            tracing::debug!(
                "Dropped {} license URLs shared by more than one SPDX id",
                ambiguous.len()
            );
        }

        index
    }
}

/// Parses a dataset URL into the form used as a by-URL key.
///
/// Blank and relative URLs are not indexable.
fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Url::parse(trimmed).ok().map(String::from)
}

/// In-memory indexed view of the SPDX license list
///
/// All three indices live behind one lock and are swapped together by
/// [`load`](Self::load). Lookups hand out cloned snapshots.
#[derive(Debug, Default)]
pub struct LicenseCatalog {
    index: RwLock<CatalogIndex>,
}

impl LicenseCatalog {
    /// Creates a catalog with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a catalog from the embedded SPDX snapshot
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let catalog = Self::empty();
        catalog.load(json)?;
        Ok(catalog)
    }

    /// Parses `json` and replaces every index with the result
    ///
    /// # Errors
    /// Returns `ResolverError::DatasetParse` if the content is not a valid
    /// license list. The existing indices are untouched in that case.
    pub fn load(&self, json: &str) -> Result<usize> {
        let dataset: LicenseDataset =
            serde_json::from_str(json).map_err(|e| ResolverError::DatasetParse {
                details: e.to_string(),
            })?;

        let index = CatalogIndex::build(dataset);
        let count = index.by_id.len();
        *self.write() = index;

        tracing::debug!("Loaded {} SPDX licenses", count);
        Ok(count)
    }

    /// Empties all indices
    pub fn clear(&self) {
        *self.write() = CatalogIndex::default();
    }

    /// Exact SPDX id lookup
    pub fn get(&self, id: &str) -> Option<License> {
        self.read().by_id.get(id).cloned()
    }

    /// Case-insensitive SPDX id lookup
    pub fn get_ignore_case(&self, id: &str) -> Option<License> {
        let index = self.read();
        index
            .by_lowercase_id
            .get(&id.to_lowercase())
            .and_then(|exact| index.by_id.get(exact))
            .cloned()
    }

    /// Looks up a license by one of its "see also" URLs
    pub fn get_by_url(&self, url: &Url) -> Option<License> {
        let index = self.read();
        index
            .by_url
            .get(url.as_str())
            .and_then(|id| index.by_id.get(id))
            .cloned()
    }

    /// Display name for an exact SPDX id
    pub fn name_of(&self, id: &str) -> Option<String> {
        self.read()
            .by_id
            .get(id)
            .and_then(|license| license.name().map(str::to_string))
    }

    /// Remembers fetched text on the catalog entry so later snapshots carry it
    pub fn store_text(&self, id: &str, text: &str) {
        if let Some(license) = self.write().by_id.get_mut(id) {
            if license.text().is_none() {
                license.set_text(Some(text.to_string()));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().by_id.is_empty()
    }

    /// All SPDX ids, sorted
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.read().by_id.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Every unambiguous URL in the fast-path index with its id, sorted by URL
    pub fn known_urls(&self) -> Vec<(String, String)> {
        let mut urls: Vec<(String, String)> = self
            .read()
            .by_url
            .iter()
            .map(|(url, id)| (url.clone(), id.clone()))
            .collect();
        urls.sort();
        urls
    }

    fn read(&self) -> RwLockReadGuard<'_, CatalogIndex> {
        self.index.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogIndex> {
        self.index.write().unwrap_or_else(PoisonError::into_inner)
    }
}
