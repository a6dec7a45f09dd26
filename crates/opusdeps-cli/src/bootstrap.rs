//! CLI bootstrap - the composition root.
//!
//! Configuration is read from the environment and the real adapters from
//! `opusdeps-runtime` are wired in here; nothing else constructs them.

use anyhow::{Context, Result};
use opusdeps_core::{Adapters, BootstrapConfig, BootstrapOutcome, bootstrap};
use tracing::debug;

/// Printed after a successful run that did its work in this process.
pub const SUCCESS_BANNER: &str = "✓ Build successful!";

/// Fully composed configuration and adapters for one run.
pub struct CliContext {
    pub config: BootstrapConfig,
    pub adapters: Adapters,
}

impl CliContext {
    /// Compose the context from `OPUSDEPS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let config = BootstrapConfig::from_env();
        Self::with_config(config)
    }

    pub fn with_config(config: BootstrapConfig) -> Result<Self> {
        let adapters =
            opusdeps_runtime::system_adapters(&config).context("failed to initialize adapters")?;
        Ok(Self { config, adapters })
    }

    /// Run the bootstrap flow for this platform.
    pub fn run(&self) -> Result<BootstrapOutcome> {
        let outcome = bootstrap(&self.config, &self.adapters)?;
        debug!(?outcome, "bootstrap finished");
        Ok(outcome)
    }
}

/// Final line for `outcome`, if any.
///
/// A relaunch prints nothing more; the elevated child reports for itself.
pub const fn completion_message(outcome: &BootstrapOutcome) -> Option<&'static str> {
    if outcome.is_relaunch() {
        None
    } else {
        Some(SUCCESS_BANNER)
    }
}
