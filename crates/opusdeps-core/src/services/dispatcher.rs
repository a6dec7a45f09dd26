//! Platform dispatch.

use tracing::debug;

use crate::config::BootstrapConfig;
use crate::domain::Platform;
use crate::error::BootstrapResult;
use crate::ports::Adapters;
use crate::services::{BootstrapOutcome, LinuxBackendResolver, WindowsInstaller};

/// Run the provisioning flow for the configured platform.
///
/// Exactly one flow runs; unrecognised platforms succeed without doing any
/// work. Errors from the flow are returned unchanged.
pub fn bootstrap(
    config: &BootstrapConfig,
    adapters: &Adapters,
) -> BootstrapResult<BootstrapOutcome> {
    debug!(platform = %config.platform(), "dispatching bootstrap flow");
    match config.platform() {
        Platform::Linux => LinuxBackendResolver::new(config, adapters).resolve(),
        Platform::Windows => WindowsInstaller::new(config, adapters).install(),
        Platform::Other(os) => Ok(BootstrapOutcome::Unsupported {
            platform: os.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{
        MockArchiveExtractor, MockCommandRunner, MockConsentPrompter, MockFetcher,
        MockPathRegistry, MockPrivilegeBroker, NoopStatus,
    };
    use std::sync::Arc;

    #[test]
    fn test_other_platform_is_a_no_op() {
        let adapters = Adapters {
            commands: Arc::new(MockCommandRunner::new()),
            fetcher: Arc::new(MockFetcher::new()),
            extractor: Arc::new(MockArchiveExtractor::new()),
            prompter: Arc::new(MockConsentPrompter::new()),
            privileges: Arc::new(MockPrivilegeBroker::new()),
            path_registry: Arc::new(MockPathRegistry::new()),
            status: Arc::new(NoopStatus),
        };
        let config =
            BootstrapConfig::default().with_platform(Platform::Other("freebsd".to_string()));

        let outcome = bootstrap(&config, &adapters).unwrap();

        assert_eq!(
            outcome,
            BootstrapOutcome::Unsupported {
                platform: "freebsd".to_string()
            }
        );
    }
}
