//! Archive extraction port.

use std::path::Path;

use crate::domain::CompressionKind;
use crate::error::BootstrapResult;

/// Unpacks a compressed tar stream into a directory tree.
///
/// Directories and regular files are materialised (file modes preserved);
/// every other entry type is skipped. The first structural error aborts the
/// extraction and partial output is left in place.
#[cfg_attr(test, mockall::automock)]
pub trait ArchiveExtractor: Send + Sync {
    fn extract(
        &self,
        archive: &Path,
        compression: CompressionKind,
        dest: &Path,
    ) -> BootstrapResult<()>;
}
