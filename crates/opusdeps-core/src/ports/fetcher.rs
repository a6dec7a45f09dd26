//! Network fetch port.

use std::path::Path;

use crate::error::BootstrapResult;

/// Retrieves a remote resource into a local file.
///
/// One request per call: no retry, no resume, no timeout. A non-success
/// status is a `BootstrapError::Network` carrying the status text.
#[cfg_attr(test, mockall::automock)]
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str, dest: &Path) -> BootstrapResult<()>;
}
