use crate::shared::Result;
use serde::Deserialize;

/// URLs a package declares about itself
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub license_url: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
}

impl PackageMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            license_url: None,
            project_url: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_license_url(mut self, url: impl Into<String>) -> Self {
        self.license_url = Some(url.into());
        self
    }

    pub fn with_project_url(mut self, url: impl Into<String>) -> Self {
        self.project_url = Some(url.into());
        self
    }

    /// `name@version`, or just the name when no version is known
    pub fn display_name(&self) -> String {
        match &self.version {
            Some(version) => format!("{}@{}", self.name, version),
            None => self.name.clone(),
        }
    }
}

/// PackageMetadataProvider port
///
/// Abstracts where package metadata comes from (a package feed, a project
/// file, a JSON listing). The resolver only needs each package's license
/// URL and project URL.
pub trait PackageMetadataProvider {
    /// Lists the packages to resolve
    ///
    /// # Errors
    /// Returns an error if the underlying source cannot be read or parsed.
    fn packages(&self) -> Result<Vec<PackageMetadata>>;
}
