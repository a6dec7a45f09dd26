//! Error types for dependency bootstrapping.
//!
//! A single error enum covers every flow so that each layer can prefix the
//! cause with its own context and the CLI can print one line for any failure.

use std::io;
use std::path::Path;
use thiserror::Error;

use crate::domain::Distro;

/// Errors that can occur while probing for or installing the native dependency.
#[derive(Debug, Error)]
pub enum BootstrapError {
    // === Consent ===
    /// The operator declined (or could not answer) a consent prompt.
    #[error("{0}")]
    ConsentDeclined(String),

    // === Linux ===
    /// No package-manager recipe exists for the detected distribution.
    #[error("automatic installation not supported for your distribution ({0})")]
    DistroUnsupported(Distro),

    /// The package manager ran but reported failure.
    #[error("installation failed: {0}")]
    PackageManager(String),

    // === Acquisition ===
    /// Non-success HTTP status or transport fault.
    #[error("{0}")]
    Network(String),

    /// Malformed or unsupported compressed stream, or an extraction I/O fault.
    #[error("{0}")]
    Archive(String),

    // === Windows ===
    /// The privilege-escalation request was rejected or could not be issued.
    #[error("failed to elevate: {0} (you may have cancelled the UAC prompt)")]
    ElevationDenied(String),

    /// Reading or writing the machine-wide search path failed.
    #[error("{0}")]
    PathMutation(String),

    // === Process & IO ===
    /// A subprocess could not be spawned at all.
    #[error("failed to run {program}: {reason}")]
    Command { program: String, reason: String },

    /// A filesystem operation failed.
    #[error("{context}: {cause}")]
    Filesystem { context: String, cause: io::Error },

    /// The operation has no implementation on this platform.
    #[error("{0}")]
    Unsupported(String),

    /// An inner error prefixed with the stage that produced it.
    #[error("{context}: {inner}")]
    Context {
        context: String,
        inner: Box<BootstrapError>,
    },
}

impl BootstrapError {
    /// Wrap this error with a stage prefix (e.g. `download failed`).
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            inner: Box::new(self),
        }
    }

    /// Create a `Filesystem` error that names the path involved.
    pub fn io(action: &str, path: &Path, cause: io::Error) -> Self {
        Self::Filesystem {
            context: format!("{action} {}", path.display()),
            cause,
        }
    }

    /// Create a `ConsentDeclined` error with the message shown to the operator.
    pub fn declined(message: impl Into<String>) -> Self {
        Self::ConsentDeclined(message.into())
    }

    /// Create an `Unsupported` error for a Windows-only operation.
    pub fn windows_only() -> Self {
        Self::Unsupported("only supported on Windows".to_string())
    }

    /// Strip any `Context` layers and return the underlying error.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { inner, .. } => inner.root(),
            other => other,
        }
    }
}

/// Result type alias for bootstrap operations.
pub type BootstrapResult<T> = Result<T, BootstrapError>;
