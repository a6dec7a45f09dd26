//! Port definitions (trait abstractions) for the outside world.
//!
//! Services in this crate only see these traits. Concrete adapters (HTTP
//! client, tar extractor, subprocess runner, terminal prompt, PowerShell
//! bridges) live in `opusdeps-runtime`.

mod command;
mod consent;
mod extractor;
mod fetcher;
mod privileges;

use std::sync::Arc;

pub use command::{CommandOutput, CommandRunner, CommandSpec, StdioMode};
pub use consent::{ConsentPrompter, NoopStatus, StatusReporter};
pub use extractor::ArchiveExtractor;
pub use fetcher::Fetcher;
pub use privileges::{PathRegistry, PrivilegeBroker, RelaunchReport};

#[cfg(test)]
pub use command::MockCommandRunner;
#[cfg(test)]
pub use consent::MockConsentPrompter;
#[cfg(test)]
pub use extractor::MockArchiveExtractor;
#[cfg(test)]
pub use fetcher::MockFetcher;
#[cfg(test)]
pub use privileges::{MockPathRegistry, MockPrivilegeBroker};

/// Container for every adapter the flows need.
///
/// Built once at the composition root and handed to the dispatcher.
#[derive(Clone)]
pub struct Adapters {
    pub commands: Arc<dyn CommandRunner>,
    pub fetcher: Arc<dyn Fetcher>,
    pub extractor: Arc<dyn ArchiveExtractor>,
    pub prompter: Arc<dyn ConsentPrompter>,
    pub privileges: Arc<dyn PrivilegeBroker>,
    pub path_registry: Arc<dyn PathRegistry>,
    pub status: Arc<dyn StatusReporter>,
}
