// SPDX-License-Identifier: MPL-2.0
//! Opaque locator for a picked media item.

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

/// URI-like reference to a media item chosen in the picker.
///
/// Local files are stored as percent-encoded `file://` URIs. Other schemes
/// (e.g. `content://media/7`) are kept verbatim; they can be held and shown
/// but not loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaReference(String);

impl MediaReference {
    /// Wraps an already formed URI.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Builds a `file://` reference from an absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the path is relative.
    pub fn from_path(path: &Path) -> Result<Self> {
        Url::from_file_path(path)
            .map(|url| Self(url.into()))
            .map_err(|()| Error::Io(format!("Not an absolute path: {}", path.display())))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the reference to a local path when it uses the `file` scheme.
    #[must_use]
    pub fn to_file_path(&self) -> Option<PathBuf> {
        let url = Url::parse(&self.0).ok()?;
        if url.scheme() != "file" {
            return None;
        }
        url.to_file_path().ok()
    }

    /// Last path segment, decoded, for window titles and diagnostics.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self
            .to_file_path()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        {
            return name;
        }
        self.0
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(&self.0)
            .to_string()
    }
}

impl fmt::Display for MediaReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
