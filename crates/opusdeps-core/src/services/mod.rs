//! Orchestration services: the platform dispatcher and the two provisioning
//! flows it selects between.

mod dispatcher;
mod linux;
mod windows;

pub use dispatcher::bootstrap;
pub use linux::LinuxBackendResolver;
pub use windows::{WindowsInstaller, copy_tree};

/// Result of registering the install's `bin` directory in the machine `Path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathRegistration {
    AlreadyPresent,
    Added,
    /// Registration failed; the install is still usable.
    Failed { reason: String },
}

/// How a bootstrap run ended successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Neither Linux nor Windows; nothing was done.
    Unsupported { platform: String },
    /// `pkg-config` found the backend on the first probe.
    BackendPresent { backend: String },
    /// The backend was installed through the package manager.
    BackendInstalled { backend: String },
    AlreadyInstalled { registration: PathRegistration },
    Installed { registration: PathRegistration },
    /// The process relaunched itself elevated and the child has exited.
    ///
    /// The child's exit code is informational; this run still succeeds.
    Relaunched { exit_code: Option<i32> },
}

impl BootstrapOutcome {
    pub const fn is_relaunch(&self) -> bool {
        matches!(self, Self::Relaunched { .. })
    }
}
