//! Tar extraction for gzip- and zstd-compressed archives.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use opusdeps_core::{ArchiveExtractor, BootstrapError, BootstrapResult, CompressionKind};
use tar::EntryType;
use tracing::{debug, warn};

/// Unpacks directories and regular files, skipping every other entry type.
#[derive(Debug, Default, Clone, Copy)]
pub struct TarExtractor;

impl TarExtractor {
    pub const fn new() -> Self {
        Self
    }
}

impl ArchiveExtractor for TarExtractor {
    fn extract(
        &self,
        archive: &Path,
        compression: CompressionKind,
        dest: &Path,
    ) -> BootstrapResult<()> {
        debug!(archive = %archive.display(), %compression, dest = %dest.display(), "extracting");
        let file =
            File::open(archive).map_err(|e| BootstrapError::io("failed to open", archive, e))?;

        let decoder: Box<dyn Read> = match compression {
            CompressionKind::Gzip => Box::new(GzDecoder::new(file)),
            CompressionKind::Zstd => Box::new(
                zstd::Decoder::new(file)
                    .map_err(|e| BootstrapError::Archive(format!("invalid zstd stream: {e}")))?,
            ),
        };

        unpack(decoder, dest)
    }
}

fn unpack(reader: impl Read, dest: &Path) -> BootstrapResult<()> {
    let malformed = |e: io::Error| BootstrapError::Archive(format!("failed to read archive: {e}"));

    let mut archive = tar::Archive::new(reader);
    for entry in archive.entries().map_err(malformed)? {
        let mut entry = entry.map_err(malformed)?;
        let entry_path = entry.path().map_err(malformed)?.into_owned();
        let Some(relative) = contained(&entry_path) else {
            warn!(path = %entry_path.display(), "skipping archive entry outside destination");
            continue;
        };
        if relative.as_os_str().is_empty() {
            continue;
        }
        let target = dest.join(relative);

        match entry.header().entry_type() {
            EntryType::Directory => {
                fs::create_dir_all(&target)
                    .map_err(|e| BootstrapError::io("failed to create", &target, e))?;
            }
            EntryType::Regular => {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)
                        .map_err(|e| BootstrapError::io("failed to create", parent, e))?;
                }
                let mut out = File::create(&target)
                    .map_err(|e| BootstrapError::io("failed to create", &target, e))?;
                io::copy(&mut entry, &mut out).map_err(|e| {
                    BootstrapError::Archive(format!("failed to extract {}: {e}", target.display()))
                })?;
                apply_mode(&target, entry.header().mode().ok())?;
            }
            other => debug!(path = %entry_path.display(), ?other, "skipping entry"),
        }
    }
    Ok(())
}

/// Entry path with `.` components removed, or `None` if it would escape the
/// destination (absolute, prefixed or containing `..`). The archive root
/// (`./`) maps to an empty path.
fn contained(path: &Path) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(clean)
}

#[cfg(unix)]
fn apply_mode(path: &Path, mode: Option<u32>) -> BootstrapResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let Some(mode) = mode else {
        return Ok(());
    };
    fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o7777))
        .map_err(|e| BootstrapError::io("failed to set permissions on", path, e))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn apply_mode(_path: &Path, _mode: Option<u32>) -> BootstrapResult<()> {
    Ok(())
}
