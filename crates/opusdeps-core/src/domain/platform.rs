//! Platform identity and the fixed installation target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Platform family the bootstrapper knows how to provision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Linux,
    Windows,
    /// Any other OS; provisioning is a no-op there.
    Other(String),
}

impl Platform {
    /// Platform of the running binary.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS name as reported by `std::env::consts::OS`.
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => f.write_str("linux"),
            Self::Windows => f.write_str("windows"),
            Self::Other(os) => f.write_str(os),
        }
    }
}

/// Where the native library lives once installed.
///
/// `system_install_root` only matters on Windows; on Linux the library is
/// managed by the distribution's package manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationTarget {
    pub platform: Platform,
    pub system_install_root: PathBuf,
    pub lib_subpath: PathBuf,
    pub include_subpath: PathBuf,
    pub bin_subpath: PathBuf,
    /// Library file whose presence means "installed".
    pub library_file: String,
}

impl InstallationTarget {
    /// Target with the conventional `lib`/`include`/`bin` layout under `root`.
    pub fn new(platform: Platform, root: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            system_install_root: root.into(),
            lib_subpath: PathBuf::from("lib"),
            include_subpath: PathBuf::from("include"),
            bin_subpath: PathBuf::from("bin"),
            library_file: "libopus.a".to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.system_install_root
    }

    pub fn lib_dir(&self) -> PathBuf {
        self.system_install_root.join(&self.lib_subpath)
    }

    pub fn include_dir(&self) -> PathBuf {
        self.system_install_root.join(&self.include_subpath)
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.system_install_root.join(&self.bin_subpath)
    }

    /// Path checked to decide whether the library is already installed.
    pub fn system_lib_path(&self) -> PathBuf {
        self.lib_dir().join(&self.library_file)
    }

    /// The three subtrees copied out of a prebuilt bundle, with display names.
    pub fn subtrees(&self) -> [(&'static str, &Path); 3] {
        [
            ("lib", self.lib_subpath.as_path()),
            ("include", self.include_subpath.as_path()),
            ("bin", self.bin_subpath.as_path()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os_known_and_other() {
        assert_eq!(Platform::from_os("linux"), Platform::Linux);
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(
            Platform::from_os("macos"),
            Platform::Other("macos".to_string())
        );
    }

    #[test]
    fn test_target_layout() {
        let target = InstallationTarget::new(Platform::Windows, "/opt/opus");
        assert_eq!(target.lib_dir(), Path::new("/opt/opus/lib"));
        assert_eq!(target.include_dir(), Path::new("/opt/opus/include"));
        assert_eq!(target.bin_dir(), Path::new("/opt/opus/bin"));
        assert_eq!(
            target.system_lib_path(),
            Path::new("/opt/opus/lib/libopus.a")
        );
    }
}
