//! System-wide installation of the prebuilt bundle on Windows.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::{BUNDLE_COMPRESSION, BootstrapConfig};
use crate::domain::{Archive, InstallRecord, PathEntry};
use crate::error::{BootstrapError, BootstrapResult};
use crate::ports::Adapters;
use crate::services::{BootstrapOutcome, PathRegistration};

/// Installs the prebuilt bundle under the system install root and registers
/// its `bin` directory in the machine-wide `Path`.
pub struct WindowsInstaller<'a> {
    config: &'a BootstrapConfig,
    adapters: &'a Adapters,
}

impl<'a> WindowsInstaller<'a> {
    pub const fn new(config: &'a BootstrapConfig, adapters: &'a Adapters) -> Self {
        Self { config, adapters }
    }

    /// Bring the system install and `Path` registration up to date.
    ///
    /// Without elevation, any needed change relaunches the process elevated
    /// and returns `Relaunched` once the child exits.
    pub fn install(&self) -> BootstrapResult<BootstrapOutcome> {
        let target = &self.config.target;
        let bin_entry = PathEntry::from_path(&target.bin_dir());

        let installed = self.is_installed();
        let in_path = installed && self.adapters.path_registry.contains(&bin_entry);
        debug!(installed, in_path, "checked existing installation");

        if !in_path && !self.adapters.privileges.is_elevated() {
            return self.request_elevation();
        }

        let status = &self.adapters.status;
        if installed {
            status.success(&format!(
                "lib{} already installed at {}",
                self.config.backend,
                target.root().display()
            ));
            let registration = if in_path {
                status.success(&format!("{bin_entry} is already in PATH"));
                PathRegistration::AlreadyPresent
            } else {
                self.register_path(&bin_entry)
            };
            return Ok(BootstrapOutcome::AlreadyInstalled { registration });
        }

        self.acquire_and_install()?;
        let registration = self.register_path(&bin_entry);
        if registration == PathRegistration::Added {
            status.info("\n⚠ IMPORTANT: Restart your terminal/shell for PATH changes to take effect!");
            status.info("   After restarting, you can build your project.");
        }

        status.info("\nInstallation locations:");
        status.info(&format!("  Libraries: {}", target.lib_dir().display()));
        status.info(&format!("  Headers: {}", target.include_dir().display()));
        status.info(&format!("  Binaries: {}", target.bin_dir().display()));

        Ok(BootstrapOutcome::Installed { registration })
    }

    /// Whether the library file exists under the install root.
    pub fn is_installed(&self) -> bool {
        self.config.target.system_lib_path().exists()
    }

    fn request_elevation(&self) -> BootstrapResult<BootstrapOutcome> {
        let status = &self.adapters.status;
        status.info("Administrator privileges required for installation and PATH modification.");
        status.info("Requesting elevation...");

        let report = self.adapters.privileges.relaunch_elevated()?;
        match report.exit_code {
            Some(0) => info!("elevated process exited successfully"),
            Some(code) => warn!(code, "elevated process exited with failure status"),
            None => warn!("elevated process exit status unknown"),
        }

        status.success("Elevated process completed. You can now build your project.");
        Ok(BootstrapOutcome::Relaunched {
            exit_code: report.exit_code,
        })
    }

    /// Download, extract and copy the bundle into the install root.
    ///
    /// The extraction directory is removed on every exit path.
    pub fn acquire_and_install(&self) -> BootstrapResult<()> {
        let config = self.config;
        let status = &self.adapters.status;
        let root = config.target.root();

        fs::create_dir_all(&config.vendor_dir)
            .map_err(|e| BootstrapError::io("failed to create", &config.vendor_dir, e))?;

        let archive = Archive {
            source_url: config.bundle_url.clone(),
            local_path: config.bundle_archive_path(),
            compression: BUNDLE_COMPRESSION,
            destination_dir: config.extract_dir(),
        };

        status.info("Downloading opus from MSYS2...");
        self.adapters
            .fetcher
            .fetch(&archive.source_url, &archive.local_path)
            .map_err(|e| e.context("download failed"))?;

        status.info("Extracting...");
        let scratch = ScratchDir::new(archive.destination_dir.clone());
        self.adapters
            .extractor
            .extract(&archive.local_path, archive.compression, scratch.path())
            .map_err(|e| e.context("extraction failed"))?;

        status.info(&format!(
            "Installing to {} (requires admin privileges)...",
            root.display()
        ));
        let bundle_root = scratch.path().join(&config.bundle_root);
        for (name, subpath) in config.target.subtrees() {
            copy_tree(&bundle_root.join(name), &root.join(subpath))
                .map_err(|e| e.context(format!("failed to copy {name}")))?;
        }

        let record = InstallRecord::new(&config.backend, &config.version, &config.bundle_url);
        if let Err(e) = record.save(root) {
            warn!("could not write install record: {e}");
        }

        status.success("Installation successful!");
        Ok(())
    }

    /// Add `entry` to the machine `Path`. Failure is reported, never fatal.
    pub fn register_path(&self, entry: &PathEntry) -> PathRegistration {
        let status = &self.adapters.status;
        status.info("Adding to system PATH...");

        match self.adapters.path_registry.append(entry) {
            Ok(true) => {
                status.success("Added to system PATH");
                status.info("  (Restart your terminal/IDE for PATH changes to take effect)");
                PathRegistration::Added
            }
            Ok(false) => {
                status.success(&format!("{entry} is already in PATH"));
                PathRegistration::AlreadyPresent
            }
            Err(e) => {
                warn!(entry = %entry, "path registration failed: {e}");
                status.warn(&format!("Warning: Could not add to PATH: {e}"));
                status.info(&format!("Please manually add to PATH: {entry}"));
                PathRegistration::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Scratch directory removed when dropped.
struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }
        if let Err(e) = fs::remove_dir_all(&self.path) {
            warn!(path = %self.path.display(), "failed to remove scratch directory: {e}");
        }
    }
}

/// Recursively copy `src` into `dest`, preserving relative paths and modes.
///
/// Symlinks and other special entries are skipped.
pub fn copy_tree(src: &Path, dest: &Path) -> BootstrapResult<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| BootstrapError::io("failed to walk", src, e.into()))?;
        let relative = entry.path().strip_prefix(src).unwrap_or_else(|_| entry.path());
        let target = dest.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| BootstrapError::io("failed to create", &target, e))?;
        } else if file_type.is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| BootstrapError::io("failed to create", parent, e))?;
            }
            fs::copy(entry.path(), &target)
                .map_err(|e| BootstrapError::io("failed to copy", entry.path(), e))?;
        } else {
            debug!(path = %entry.path().display(), "skipping special file");
        }
    }
    Ok(())
}
