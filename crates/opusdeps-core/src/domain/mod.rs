//! Domain types for dependency bootstrapping.
//!
//! Pure data and pure functions; no process, network or terminal access
//! happens here (reading release metadata and the install receipt are the
//! only filesystem touches).

mod archive;
mod distro;
mod install_record;
mod path_entry;
mod platform;
mod probe;

pub use archive::{Archive, CompressionKind};
pub use distro::{Distro, PackageManager};
pub use install_record::{INSTALL_RECORD_FILE, InstallRecord};
pub use path_entry::{PATH_SEPARATOR, PathEntry};
pub use platform::{InstallationTarget, Platform};
pub use probe::{AFFIRMATIVE_ANSWERS, DependencyProbe, parse_consent};
