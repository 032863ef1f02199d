use super::License;
use std::fmt;

/// Outcome of resolving a single URL
///
/// Distinguishes the reasons a license could not be determined, so callers
/// and tests can tell an unknown URL from an upstream miss or a network
/// failure. None of these are errors; details go to the log stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A license was determined. Its text may be unset if retrieval failed.
    Resolved(License),
    /// No recognizer understood the URL, or the candidate id is not in the catalog.
    Unrecognized,
    /// The hosting platform reported no license for the repository.
    NotFound,
    /// A network failure prevented a result.
    FetchFailed,
}

impl Resolution {
    pub fn license(&self) -> Option<&License> {
        match self {
            Resolution::Resolved(license) => Some(license),
            _ => None,
        }
    }

    pub fn into_license(self) -> Option<License> {
        match self {
            Resolution::Resolved(license) => Some(license),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    /// Short label used in logs and CLI output
    pub fn outcome(&self) -> &'static str {
        match self {
            Resolution::Resolved(_) => "resolved",
            Resolution::Unrecognized => "unrecognized",
            Resolution::NotFound => "not-found",
            Resolution::FetchFailed => "fetch-failed",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Resolved(license) => write!(
                f,
                "{} ({})",
                license.id().unwrap_or("-"),
                license.name().unwrap_or("-")
            ),
            other => write!(f, "{}", other.outcome()),
        }
    }
}
