//! Bootstrap configuration.
//!
//! Every constant the flows depend on (backend name, archive URLs, vendor
//! directory, install root, device paths) lives here so it can be replaced in
//! tests and overridden from the environment.

use std::path::PathBuf;

use crate::domain::{CompressionKind, InstallationTarget, PackageManager, Platform};

/// Default native codec version fetched by the Windows flow.
pub const DEFAULT_VERSION: &str = "1.5.2";

/// Default `pkg-config` package name probed on Linux.
pub const DEFAULT_BACKEND: &str = "opus";

/// Default vendor (scratch) directory, relative to the working directory.
pub const DEFAULT_VENDOR_DIR: &str = "deps/opus";

/// Default system-wide install root on Windows.
pub const DEFAULT_INSTALL_ROOT: &str = r"C:\opus";

/// Release metadata consulted for distribution detection.
pub const DEFAULT_OS_RELEASE: &str = "/etc/os-release";

/// Controlling terminal device used for consent prompts.
pub const DEFAULT_TTY: &str = "/dev/tty";

/// Nested directory inside the prebuilt bundle holding `lib`/`include`/`bin`.
pub const DEFAULT_BUNDLE_ROOT: &str = "mingw64";

/// Codec wrapping the prebuilt bundle.
pub const BUNDLE_COMPRESSION: CompressionKind = CompressionKind::Zstd;

/// Extraction directory name inside the vendor directory.
pub const EXTRACT_DIR_NAME: &str = "extracted";

/// Gzip-compressed source tarball URL for `version`.
pub fn source_url_for(version: &str) -> String {
    format!("https://downloads.xiph.org/releases/opus/opus-{version}.tar.gz")
}

/// Zstd-compressed prebuilt bundle URL for `version`.
pub fn bundle_url_for(version: &str) -> String {
    format!(
        "https://mirror.msys2.org/mingw/mingw64/mingw-w64-x86_64-opus-{version}-1-any.pkg.tar.zst"
    )
}

/// Packages installed by each package manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistroPackages {
    pub apt: Vec<String>,
    pub dnf: Vec<String>,
    pub pacman: Vec<String>,
}

impl DistroPackages {
    pub fn for_manager(&self, manager: PackageManager) -> &[String] {
        match manager {
            PackageManager::Apt => &self.apt,
            PackageManager::Dnf => &self.dnf,
            PackageManager::Pacman => &self.pacman,
        }
    }
}

impl Default for DistroPackages {
    fn default() -> Self {
        let owned = |names: &[&str]| names.iter().map(|s| (*s).to_string()).collect();
        Self {
            apt: owned(&["opus-tools", "libopus0", "libopus-dev"]),
            dnf: owned(&["opus-devel", "opusfile-devel"]),
            pacman: owned(&["opus"]),
        }
    }
}

/// Fixed per-process configuration for both provisioning flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// `pkg-config` name of the backend library.
    pub backend: String,
    pub version: String,
    /// Defined for completeness; neither flow downloads it.
    pub source_url: String,
    pub bundle_url: String,
    pub vendor_dir: PathBuf,
    pub bundle_root: PathBuf,
    pub target: InstallationTarget,
    pub os_release_path: PathBuf,
    pub tty_path: PathBuf,
    pub packages: DistroPackages,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl BootstrapConfig {
    /// Defaults overridden by `OPUSDEPS_*` process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each
    /// `OPUSDEPS_*` key. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let version = get("OPUSDEPS_VERSION").unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let source_url = get("OPUSDEPS_SOURCE_URL").unwrap_or_else(|| source_url_for(&version));
        let bundle_url = get("OPUSDEPS_BUNDLE_URL").unwrap_or_else(|| bundle_url_for(&version));
        let install_root =
            get("OPUSDEPS_INSTALL_ROOT").unwrap_or_else(|| DEFAULT_INSTALL_ROOT.to_string());

        Self {
            backend: get("OPUSDEPS_BACKEND").unwrap_or_else(|| DEFAULT_BACKEND.to_string()),
            source_url,
            bundle_url,
            vendor_dir: PathBuf::from(
                get("OPUSDEPS_VENDOR_DIR").unwrap_or_else(|| DEFAULT_VENDOR_DIR.to_string()),
            ),
            bundle_root: PathBuf::from(DEFAULT_BUNDLE_ROOT),
            target: InstallationTarget::new(Platform::current(), install_root),
            os_release_path: PathBuf::from(
                get("OPUSDEPS_OS_RELEASE").unwrap_or_else(|| DEFAULT_OS_RELEASE.to_string()),
            ),
            tty_path: PathBuf::from(get("OPUSDEPS_TTY").unwrap_or_else(|| DEFAULT_TTY.to_string())),
            packages: DistroPackages::default(),
            version,
        }
    }

    /// Same configuration, pinned to `platform`.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.target.platform = platform;
        self
    }

    pub fn platform(&self) -> &Platform {
        &self.target.platform
    }

    /// Where the prebuilt bundle is downloaded to.
    pub fn bundle_archive_path(&self) -> PathBuf {
        self.vendor_dir
            .join(format!("opus.{}", BUNDLE_COMPRESSION.extension()))
    }

    /// Scratch directory the bundle is extracted into.
    pub fn extract_dir(&self) -> PathBuf {
        self.vendor_dir.join(EXTRACT_DIR_NAME)
    }
}
