//! Linux backend resolution through `pkg-config` and the distro package manager.

use tracing::{debug, info};

use crate::config::BootstrapConfig;
use crate::domain::{DependencyProbe, Distro, PackageManager};
use crate::error::{BootstrapError, BootstrapResult};
use crate::ports::{Adapters, CommandSpec, StdioMode};
use crate::services::BootstrapOutcome;

/// Probes for the codec backend and, with the operator's consent, installs it.
///
/// `Probe -> Done`, or `Probe -> DetectDistro -> consent -> install -> Probe`.
pub struct LinuxBackendResolver<'a> {
    config: &'a BootstrapConfig,
    adapters: &'a Adapters,
}

impl<'a> LinuxBackendResolver<'a> {
    pub const fn new(config: &'a BootstrapConfig, adapters: &'a Adapters) -> Self {
        Self { config, adapters }
    }

    /// Run the resolver until the backend is present or a step fails.
    pub fn resolve(&self) -> BootstrapResult<BootstrapOutcome> {
        let mut installed = false;
        loop {
            self.adapters.status.info("Detecting available audio backends...");
            let probe = self.probe();
            if probe.present {
                self.adapters
                    .status
                    .success(&format!("{} found", probe.backend));
                return Ok(if installed {
                    BootstrapOutcome::BackendInstalled {
                        backend: probe.backend,
                    }
                } else {
                    BootstrapOutcome::BackendPresent {
                        backend: probe.backend,
                    }
                });
            }

            if let Err(e) = self.remediate() {
                self.adapters.status.warn("Opus failed to install");
                return Err(e);
            }
            installed = true;
        }
    }

    /// Ask `pkg-config` whether the backend is installed.
    ///
    /// A missing `pkg-config` or any spawn failure counts as absent.
    pub fn probe(&self) -> DependencyProbe {
        let backend = self.config.backend.as_str();
        let spec = CommandSpec::new("pkg-config")
            .args(["--exists", backend])
            .stdio(StdioMode::Quiet);

        match self.adapters.commands.run(&spec) {
            Ok(output) if output.success => DependencyProbe::present(backend),
            Ok(output) => {
                debug!(backend, status = %output.status_text(), "pkg-config reports backend missing");
                DependencyProbe::missing(backend)
            }
            Err(e) => {
                debug!(backend, "pkg-config unavailable: {e}");
                DependencyProbe::missing(backend)
            }
        }
    }

    /// Explain the manual fix, then install if the operator agrees.
    fn remediate(&self) -> BootstrapResult<()> {
        let status = &self.adapters.status;
        status.info("\n❌ No audio encoder found!");
        status.info("\nYou need to install one of the following:");

        let distro = Distro::detect(&self.config.os_release_path);
        info!(%distro, "detected distribution");
        status.info(&self.manual_instructions(distro));

        if !self
            .adapters
            .prompter
            .confirm("\nWould you like to install one now? (y/N)")
        {
            return Err(BootstrapError::declined("audio backend required to build"));
        }

        self.install(distro)
    }

    /// Distro-specific text shown before the first consent prompt.
    pub fn manual_instructions(&self, distro: Distro) -> String {
        match distro.package_manager() {
            Some(manager) => format!(
                "\n  # {}:\n  {}",
                distro.family_label(),
                manager.manual_command(self.packages(manager))
            ),
            None => format!(
                "\n  Please install development packages for one of:\n    - lib{}",
                self.config.backend
            ),
        }
    }

    /// Run the package manager for `distro` after a second confirmation.
    pub fn install(&self, distro: Distro) -> BootstrapResult<()> {
        let manager = distro
            .package_manager()
            .ok_or(BootstrapError::DistroUnsupported(distro))?;
        let spec = self.install_command(manager);

        self.adapters.status.info(&format!("Running: {spec}"));
        if !self.adapters.prompter.confirm("\nProceed? (y/N)") {
            return Err(BootstrapError::declined("installation cancelled"));
        }

        info!(command = %spec, "running package manager");
        let output = self
            .adapters
            .commands
            .run(&spec)
            .map_err(|e| BootstrapError::PackageManager(e.to_string()))?;
        if !output.success {
            return Err(BootstrapError::PackageManager(output.status_text()));
        }

        self.adapters
            .status
            .success("Installation successful! Retrying build...");
        Ok(())
    }

    /// Non-interactive install command for `manager`, run through `sudo`.
    pub fn install_command(&self, manager: PackageManager) -> CommandSpec {
        CommandSpec::new("sudo")
            .args(manager.install_args(self.packages(manager)))
            .stdio(StdioMode::Inherit)
    }

    fn packages(&self, manager: PackageManager) -> &[String] {
        self.config.packages.for_manager(manager)
    }
}
