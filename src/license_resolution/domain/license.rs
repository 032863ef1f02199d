use url::Url;

/// License value object
///
/// A `License` handed to a caller is always an owned snapshot. Catalog entries
/// and cached repository results are cloned on the way out, so editing
/// `text` on a returned value never reaches shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    id: Option<String>,
    name: Option<String>,
    text: Option<String>,
    is_master: bool,
    download_uri: Option<Url>,
}

impl License {
    /// Creates a license inferred from somewhere other than the SPDX dataset
    pub fn inferred(id: Option<String>, name: Option<String>) -> Self {
        Self {
            id,
            name,
            text: None,
            is_master: false,
            download_uri: None,
        }
    }

    /// Creates a catalog entry sourced from the SPDX dataset
    ///
    /// Only entries with an absolute details URL are text sources; the others
    /// keep `is_master == false` and no download URI.
    pub(crate) fn master(id: &str, name: &str, details_url: Option<&str>) -> Self {
        let download_uri = details_url.and_then(|url| Url::parse(url).ok());
        Self {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            text: None,
            is_master: download_uri.is_some(),
            download_uri,
        }
    }

    pub fn with_text(mut self, text: Option<String>) -> Self {
        self.text = text;
        self
    }

    pub fn with_download_uri(mut self, download_uri: Option<Url>) -> Self {
        self.download_uri = download_uri;
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_master(&self) -> bool {
        self.is_master
    }

    pub fn download_uri(&self) -> Option<&Url> {
        self.download_uri.as_ref()
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }
}
