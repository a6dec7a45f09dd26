//! Persistent machine-wide `Path` access through PowerShell.

use std::sync::Arc;

use opusdeps_core::{BootstrapError, BootstrapResult, CommandRunner, PathEntry, PathRegistry};
use tracing::{debug, info};

use crate::powershell;

/// Environment variable carrying the entry into the scripts.
const ENTRY_VAR: &str = "OPUSDEPS_PATH_ENTRY";

/// Prints `yes` when the stored machine `Path` contains the entry.
///
/// `String.Contains` is ordinal, so membership stays case-sensitive.
const CONTAINS_SCRIPT: &str = r"
$ErrorActionPreference = 'Stop'
$path = [Environment]::GetEnvironmentVariable('Path', 'Machine')
if ($null -ne $path -and $path.Contains($env:OPUSDEPS_PATH_ENTRY)) { 'yes' } else { 'no' }
";

/// Reads, tests and writes the machine `Path` in one process so the stored
/// value never leaves PowerShell. Prints `added` or `present`.
const APPEND_SCRIPT: &str = r"
$ErrorActionPreference = 'Stop'
$entry = $env:OPUSDEPS_PATH_ENTRY
$path = [Environment]::GetEnvironmentVariable('Path', 'Machine')
if ($null -eq $path) { $path = '' }
if ($path.Contains($entry)) { 'present'; exit 0 }
if ($path -eq '' -or $path.EndsWith(';')) {
    $updated = $path + $entry
} else {
    $updated = $path + ';' + $entry
}
[Environment]::SetEnvironmentVariable('Path', $updated, 'Machine')
'added'
";

/// Reads and writes the machine `Path` via `[Environment]`.
pub struct MachinePathRegistry {
    runner: Arc<dyn CommandRunner>,
}

impl MachinePathRegistry {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Run `script` with `entry` in its environment and return the last
    /// non-empty line it printed.
    fn run_for(&self, script: &str, entry: &PathEntry, action: &str) -> BootstrapResult<String> {
        let spec = powershell::script(script).env(ENTRY_VAR, entry.to_string());
        let output = self
            .runner
            .run(&spec)
            .map_err(|e| BootstrapError::PathMutation(format!("failed to {action} PATH: {e}")))?;
        if !output.success {
            return Err(BootstrapError::PathMutation(format!(
                "failed to {action} PATH: {}",
                output.status_text()
            )));
        }
        Ok(output
            .stdout
            .lines()
            .map(str::trim)
            .rfind(|l| !l.is_empty())
            .unwrap_or_default()
            .to_string())
    }
}

impl PathRegistry for MachinePathRegistry {
    fn contains(&self, entry: &PathEntry) -> bool {
        match self.run_for(CONTAINS_SCRIPT, entry, "read") {
            Ok(answer) => answer == "yes",
            Err(e) => {
                debug!("treating PATH as not containing {entry}: {e}");
                false
            }
        }
    }

    fn append(&self, entry: &PathEntry) -> BootstrapResult<bool> {
        match self.run_for(APPEND_SCRIPT, entry, "update")?.as_str() {
            "added" => {
                info!(%entry, "added to machine PATH");
                Ok(true)
            }
            "present" => Ok(false),
            other => Err(BootstrapError::PathMutation(format!(
                "unexpected reply while updating PATH: {other:?}"
            ))),
        }
    }
}

/// Registry for platforms without a machine-wide `Path`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedPathRegistry;

impl PathRegistry for UnsupportedPathRegistry {
    fn contains(&self, _entry: &PathEntry) -> bool {
        false
    }

    fn append(&self, _entry: &PathEntry) -> BootstrapResult<bool> {
        Err(BootstrapError::windows_only())
    }
}
