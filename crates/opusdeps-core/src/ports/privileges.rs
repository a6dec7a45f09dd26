//! Privilege elevation and machine-wide search path ports (Windows only).

use crate::domain::PathEntry;
use crate::error::BootstrapResult;

/// Outcome of relaunching the current process with elevated privileges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelaunchReport {
    /// Exit code of the elevated child, when it could be determined.
    pub exit_code: Option<i32>,
}

/// Detects and requests administrator privileges.
#[cfg_attr(test, mockall::automock)]
pub trait PrivilegeBroker: Send + Sync {
    /// Whether the current process already runs elevated.
    fn is_elevated(&self) -> bool;

    /// Relaunch the current executable with the same arguments and working
    /// directory under elevation and wait for it to exit.
    ///
    /// Fails with `ElevationDenied` if the request is rejected or the
    /// elevation mechanism cannot be invoked.
    fn relaunch_elevated(&self) -> BootstrapResult<RelaunchReport>;
}

/// Sole owner of the persistent machine-wide `Path` variable.
#[cfg_attr(test, mockall::automock)]
pub trait PathRegistry: Send + Sync {
    /// Whether `entry` is contained in the stored value. Read failures count
    /// as "not contained".
    fn contains(&self, entry: &PathEntry) -> bool;

    /// Append `entry` if not already contained. Returns whether the stored
    /// value changed.
    fn append(&self, entry: &PathEntry) -> BootstrapResult<bool>;
}
