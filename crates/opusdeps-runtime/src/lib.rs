//! OS, network and terminal adapters for the `opusdeps-core` ports.
//!
//! - [`SystemCommandRunner`]: `std::process` with `which` lookup
//! - [`HttpFetcher`]: blocking `reqwest` download with an `indicatif` bar
//! - [`TarExtractor`]: `tar` over `flate2` or `zstd`
//! - [`TerminalPrompter`] / [`ConsoleStatus`]: operator interaction
//! - [`WindowsPrivileges`] / [`MachinePathRegistry`]: PowerShell-backed
//!   elevation and machine `Path` access

#![deny(unused_crate_dependencies)]

mod archive;
mod command;
mod fetch;
mod path_registry;
mod powershell;
mod privileges;
mod prompt;
mod status;

use std::sync::Arc;

use opusdeps_core::{
    Adapters, BootstrapConfig, BootstrapResult, CommandRunner, PathRegistry, Platform,
    PrivilegeBroker,
};

pub use archive::TarExtractor;
pub use command::SystemCommandRunner;
pub use fetch::HttpFetcher;
pub use path_registry::{MachinePathRegistry, UnsupportedPathRegistry};
pub use privileges::{UnsupportedPrivileges, WindowsPrivileges};
pub use prompt::TerminalPrompter;
pub use status::ConsoleStatus;

#[cfg(test)]
use tempfile as _;

/// Real adapters for the configured platform.
///
/// Elevation and `Path` access are only wired to PowerShell on Windows.
pub fn system_adapters(config: &BootstrapConfig) -> BootstrapResult<Adapters> {
    let commands: Arc<dyn CommandRunner> = Arc::new(SystemCommandRunner::new());
    let (privileges, path_registry): (Arc<dyn PrivilegeBroker>, Arc<dyn PathRegistry>) =
        match config.platform() {
            Platform::Windows => (
                Arc::new(WindowsPrivileges::new(commands.clone())),
                Arc::new(MachinePathRegistry::new(commands.clone())),
            ),
            Platform::Linux | Platform::Other(_) => {
                (Arc::new(UnsupportedPrivileges), Arc::new(UnsupportedPathRegistry))
            }
        };

    Ok(Adapters {
        commands,
        fetcher: Arc::new(HttpFetcher::new()?),
        extractor: Arc::new(TarExtractor::new()),
        prompter: Arc::new(TerminalPrompter::new(config.tty_path.clone())),
        privileges,
        path_registry,
        status: Arc::new(ConsoleStatus),
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use opusdeps_core::{
        BootstrapError, BootstrapResult, CommandOutput, CommandRunner, CommandSpec,
    };

    /// Gives the same reply to every command and records what was asked.
    pub struct ScriptedRunner {
        reply: Result<CommandOutput, String>,
        pub calls: Mutex<Vec<CommandSpec>>,
    }

    impl ScriptedRunner {
        pub fn replying(reply: BootstrapResult<CommandOutput>) -> Self {
            Self {
                reply: reply.map_err(|e| e.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn lines(&self) -> Vec<String> {
            self.calls.lock().unwrap().iter().map(ToString::to_string).collect()
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&self, spec: &CommandSpec) -> BootstrapResult<CommandOutput> {
            self.calls.lock().unwrap().push(spec.clone());
            self.reply.clone().map_err(|reason| BootstrapError::Command {
                program: spec.program.clone(),
                reason,
            })
        }
    }
}
