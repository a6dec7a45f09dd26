//! Directory entries in the machine-wide search path.

use std::fmt;
use std::path::Path;

/// Separator between entries of a Windows `Path` value.
pub const PATH_SEPARATOR: char = ';';

/// A directory that must appear in the persistent machine-wide `Path`.
///
/// Membership is a verbatim, case-sensitive substring test with no
/// directory-boundary awareness: `C:\op` is reported as present when the
/// stored value contains `C:\opus`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry(String);

impl PathEntry {
    pub fn new(dir: impl Into<String>) -> Self {
        Self(dir.into())
    }

    pub fn from_path(dir: &Path) -> Self {
        Self(dir.display().to_string())
    }

    /// Whether `path_value` already contains this entry.
    pub fn is_contained_in(&self, path_value: &str) -> bool {
        path_value.contains(self.0.as_str())
    }

    /// New `Path` value with this entry appended, or `None` if already present.
    ///
    /// The existing value is kept verbatim; a separator is inserted only when
    /// the value is non-empty and does not already end with one.
    pub fn append_to(&self, path_value: &str) -> Option<String> {
        if self.is_contained_in(path_value) {
            return None;
        }
        if path_value.is_empty() || path_value.ends_with(PATH_SEPARATOR) {
            Some(format!("{path_value}{}", self.0))
        } else {
            Some(format!("{path_value}{PATH_SEPARATOR}{}", self.0))
        }
    }
}

impl fmt::Display for PathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
