//! PyPI JSON API response types and queries
//!
//! Field mapping follows the upstream JSON API; fields beyond the ones
//! modelled here are ignored, and missing fields decode to empty values.
//! See: https://warehouse.pypa.io/api-reference/json.html

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RegistryResult;
use pypi_core::error::PypiError;

/// Mapping from version string to the packages published under it.
///
/// Keys are matched exactly; "1.0" and "1.0.0" are distinct versions.
pub type Releases = HashMap<String, Vec<Package>>;

/// Metadata response from the project or release endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Response {
    /// Project metadata
    pub info: Info,
    /// Monotonic revision marker for the index entry, informational only
    pub last_serial: i64,
    /// All published versions and their packages
    pub releases: Releases,
    /// Packages of the single release when fetched via the release
    /// endpoint; empty for project-endpoint responses
    pub urls: Vec<Package>,
}

/// Project metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Info {
    /// Author name
    pub author: String,
    /// Author email address
    pub author_email: String,
    /// Trove classifier strings
    pub classifiers: Vec<String>,
    /// Canonical package URL on the index
    pub package_url: String,
}

/// One distributable file of a release
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct Package {
    /// Base name of the file, e.g. a wheel or sdist name
    pub filename: String,
    /// Fully qualified download URL
    pub url: String,
}

impl Response {
    /// Get the packages published under `version`.
    ///
    /// Defined over `releases` for both endpoints; for a release-endpoint
    /// response `urls` carries the same set but is not consulted.
    pub fn packages(&self, version: &str) -> RegistryResult<&[Package]> {
        self.releases
            .get(version)
            .map(Vec::as_slice)
            .ok_or_else(|| PypiError::VersionNotFound {
                version: version.to_string(),
            })
    }
}

/// Search criteria for locating a single package within a release.
///
/// A field that is `None` or the empty string does not participate in
/// matching; when both fields are set, a package must match both. Matching
/// is exact string equality, case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageQuery {
    /// Exact filename to match
    pub filename: Option<String>,
    /// Exact download URL to match
    pub url: Option<String>,
}

/// Match strategy resolved once per search from the populated query fields
enum Matcher<'a> {
    Filename(&'a str),
    Url(&'a str),
    Both { filename: &'a str, url: &'a str },
}

impl Matcher<'_> {
    fn matches(&self, package: &Package) -> bool {
        match *self {
            Matcher::Filename(filename) => package.filename == filename,
            Matcher::Url(url) => package.url == url,
            Matcher::Both { filename, url } => {
                package.filename == filename && package.url == url
            },
        }
    }
}

impl PackageQuery {
    /// Query matching on filename alone
    pub fn by_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            url: None,
        }
    }

    /// Query matching on download URL alone
    pub fn by_url(url: impl Into<String>) -> Self {
        Self {
            filename: None,
            url: Some(url.into()),
        }
    }

    /// Query matching on filename and download URL together
    pub fn new(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            url: Some(url.into()),
        }
    }

    /// Find the first package matching this query, scanning in order.
    ///
    /// Fails with [`PypiError::EmptyQuery`] when neither field is set and
    /// with [`PypiError::PackageNotFound`] when nothing matches.
    pub fn find_in<'a>(&self, packages: &'a [Package]) -> RegistryResult<&'a Package> {
        let matcher = self.matcher().ok_or(PypiError::EmptyQuery)?;
        packages
            .iter()
            .find(|package| matcher.matches(package))
            .ok_or_else(|| PypiError::PackageNotFound {
                criteria: self.to_string(),
            })
    }

    /// Resolve the match strategy, or `None` for an empty query
    fn matcher(&self) -> Option<Matcher<'_>> {
        // Empty strings count as absent
        let filename = self.filename.as_deref().filter(|f| !f.is_empty());
        let url = self.url.as_deref().filter(|u| !u.is_empty());
        match (filename, url) {
            (Some(filename), Some(url)) => Some(Matcher::Both { filename, url }),
            (Some(filename), None) => Some(Matcher::Filename(filename)),
            (None, Some(url)) => Some(Matcher::Url(url)),
            (None, None) => None,
        }
    }
}

impl fmt::Display for PackageQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "filename '{}', url '{}'",
            self.filename.as_deref().unwrap_or(""),
            self.url.as_deref().unwrap_or("")
        )
    }
}
