//! Build-time bootstrapper for the native Opus codec library.
//!
//! On Linux the backend is located with `pkg-config` and, with consent,
//! installed through the distribution's package manager. On Windows a
//! prebuilt bundle is installed system-wide and its `bin` directory is
//! registered in the machine `Path`. Every other platform is a no-op.
//!
//! This crate holds the domain types, configuration, ports and the
//! orchestration services. Adapters live in `opusdeps-runtime`.

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use config::{BootstrapConfig, DistroPackages};
pub use domain::{
    Archive, CompressionKind, DependencyProbe, Distro, InstallRecord, InstallationTarget,
    PackageManager, PathEntry, Platform, parse_consent,
};
pub use error::{BootstrapError, BootstrapResult};
pub use ports::{
    Adapters, ArchiveExtractor, CommandOutput, CommandRunner, CommandSpec, ConsentPrompter,
    Fetcher, NoopStatus, PathRegistry, PrivilegeBroker, RelaunchReport, StatusReporter,
    StdioMode,
};
pub use services::{BootstrapOutcome, PathRegistration, bootstrap};
