//! Linux distribution identity and the package-manager recipe for each.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Linux distribution detected from release metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Distro {
    Debian,
    Ubuntu,
    Fedora,
    Rhel,
    Centos,
    Arch,
    Unknown,
}

/// Ordered needles for classification; first match wins.
///
/// Order matters when metadata names several distributions (Ubuntu's
/// `ID_LIKE=debian`, CentOS's `ID_LIKE="rhel fedora"`). `arch` also matches
/// words like "architecture".
const CLASSIFICATION_ORDER: &[(&[&str], Distro)] = &[
    (&["ubuntu"], Distro::Ubuntu),
    (&["debian"], Distro::Debian),
    (&["fedora"], Distro::Fedora),
    (&["rhel", "red hat"], Distro::Rhel),
    (&["centos"], Distro::Centos),
    (&["arch"], Distro::Arch),
];

impl Distro {
    /// Classify release metadata text. Pure; case-insensitive substring scan.
    pub fn classify(release_metadata: &str) -> Self {
        let lowered = release_metadata.to_lowercase();
        CLASSIFICATION_ORDER
            .iter()
            .find(|(needles, _)| needles.iter().any(|n| lowered.contains(n)))
            .map_or(Self::Unknown, |(_, distro)| *distro)
    }

    /// Read and classify a release-metadata file (normally `/etc/os-release`).
    ///
    /// An unreadable file yields `Unknown`.
    pub fn detect(os_release: &Path) -> Self {
        match std::fs::read_to_string(os_release) {
            Ok(content) => Self::classify(&content),
            Err(e) => {
                tracing::debug!(path = %os_release.display(), "cannot read release metadata: {e}");
                Self::Unknown
            }
        }
    }

    /// Package manager used to install the dependency on this distro.
    pub const fn package_manager(self) -> Option<PackageManager> {
        match self {
            Self::Debian | Self::Ubuntu => Some(PackageManager::Apt),
            Self::Fedora | Self::Rhel | Self::Centos => Some(PackageManager::Dnf),
            Self::Arch => Some(PackageManager::Pacman),
            Self::Unknown => None,
        }
    }

    /// Family label used in install instructions.
    pub const fn family_label(self) -> &'static str {
        match self {
            Self::Debian | Self::Ubuntu => "Debian/Ubuntu",
            Self::Fedora | Self::Rhel | Self::Centos => "Fedora/RHEL/CentOS",
            Self::Arch => "Arch Linux",
            Self::Unknown => "Linux",
        }
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debian => "debian",
            Self::Ubuntu => "ubuntu",
            Self::Fedora => "fedora",
            Self::Rhel => "rhel",
            Self::Centos => "centos",
            Self::Arch => "arch",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// System package managers the resolver can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageManager {
    Apt,
    Dnf,
    Pacman,
}

impl PackageManager {
    /// Arguments (after `sudo`) for a non-interactive install of `packages`.
    pub fn install_args(self, packages: &[String]) -> Vec<String> {
        let prefix: &[&str] = match self {
            Self::Apt => &["apt", "install", "-y"],
            Self::Dnf => &["dnf", "install", "-y"],
            Self::Pacman => &["pacman", "-S", "--noconfirm"],
        };
        prefix
            .iter()
            .map(|s| (*s).to_string())
            .chain(packages.iter().cloned())
            .collect()
    }

    /// Command line shown to the operator for a manual install.
    pub fn manual_command(self, packages: &[String]) -> String {
        let verb = match self {
            Self::Apt => "sudo apt-get install",
            Self::Dnf => "sudo dnf install",
            Self::Pacman => "sudo pacman -S",
        };
        format!("{verb} {}", packages.join(" "))
    }
}
