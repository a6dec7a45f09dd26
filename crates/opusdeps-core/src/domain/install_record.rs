//! Receipt written next to a system-wide installation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BootstrapError, BootstrapResult};

/// File name of the receipt inside the install root.
pub const INSTALL_RECORD_FILE: &str = "opusdeps-install.json";

/// What was installed, from where, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallRecord {
    pub backend: String,
    pub version: String,
    pub bundle_url: String,
    pub installed_at: DateTime<Utc>,
}

impl InstallRecord {
    pub fn new(backend: &str, version: &str, bundle_url: &str) -> Self {
        Self {
            backend: backend.to_string(),
            version: version.to_string(),
            bundle_url: bundle_url.to_string(),
            installed_at: Utc::now(),
        }
    }

    pub fn path_in(root: &Path) -> PathBuf {
        root.join(INSTALL_RECORD_FILE)
    }

    /// Save the receipt into `root`.
    pub fn save(&self, root: &Path) -> BootstrapResult<()> {
        let path = Self::path_in(root);
        let json = serde_json::to_string_pretty(self).map_err(|e| BootstrapError::Filesystem {
            context: "failed to serialize install record".to_string(),
            cause: e.into(),
        })?;
        fs::write(&path, json).map_err(|e| BootstrapError::io("failed to write", &path, e))
    }

    /// Load the receipt from `root`, if one exists and parses.
    pub fn load(root: &Path) -> Option<Self> {
        let json = fs::read_to_string(Self::path_in(root)).ok()?;
        serde_json::from_str(&json).ok()
    }
}
