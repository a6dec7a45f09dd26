//! Elevation detection and elevated relaunch on Windows.

use std::env;
use std::sync::Arc;

use opusdeps_core::{
    BootstrapError, BootstrapResult, CommandRunner, CommandSpec, PrivilegeBroker, RelaunchReport,
    StdioMode,
};
use tracing::{debug, info};

use crate::powershell;

/// Exits non-zero when `Start-Process` throws (rejected UAC prompt).
const RELAUNCH_SCRIPT: &str = r"
$ErrorActionPreference = 'Stop'
$params = @{
    FilePath = $env:OPUSDEPS_RELAUNCH_EXE
    WorkingDirectory = $env:OPUSDEPS_RELAUNCH_CWD
    Verb = 'RunAs'
    Wait = $true
    PassThru = $true
}
if ($env:OPUSDEPS_RELAUNCH_ARGS) {
    $params.ArgumentList = $env:OPUSDEPS_RELAUNCH_ARGS
}
$child = Start-Process @params
if (-not $child) { exit 1 }
Write-Output $child.ExitCode
";

/// Elevation through `net session` (probe) and `Start-Process -Verb RunAs`.
pub struct WindowsPrivileges {
    runner: Arc<dyn CommandRunner>,
}

impl WindowsPrivileges {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// PowerShell command that relaunches `exe` elevated and prints the
    /// child's exit code.
    pub fn relaunch_command(exe: &str, args: &[String], cwd: &str) -> CommandSpec {
        let joined = args
            .iter()
            .map(|a| powershell::quote_arg(a))
            .collect::<Vec<_>>()
            .join(" ");
        powershell::script(RELAUNCH_SCRIPT)
            .env("OPUSDEPS_RELAUNCH_EXE", exe)
            .env("OPUSDEPS_RELAUNCH_CWD", cwd)
            .env("OPUSDEPS_RELAUNCH_ARGS", joined)
    }
}

impl PrivilegeBroker for WindowsPrivileges {
    fn is_elevated(&self) -> bool {
        let spec = CommandSpec::new("net").arg("session").stdio(StdioMode::Quiet);
        match self.runner.run(&spec) {
            Ok(output) => output.success,
            Err(e) => {
                debug!("elevation probe failed: {e}");
                false
            }
        }
    }

    fn relaunch_elevated(&self) -> BootstrapResult<RelaunchReport> {
        let exe = env::current_exe().map_err(|e| {
            BootstrapError::ElevationDenied(format!("failed to get executable path: {e}"))
        })?;
        let cwd = env::current_dir().map_err(|e| {
            BootstrapError::ElevationDenied(format!("failed to get working directory: {e}"))
        })?;
        let args: Vec<String> = env::args().skip(1).collect();

        let spec = Self::relaunch_command(
            &exe.display().to_string(),
            &args,
            &cwd.display().to_string(),
        );
        info!(exe = %exe.display(), "requesting elevated relaunch");

        let output = self
            .runner
            .run(&spec)
            .map_err(|e| BootstrapError::ElevationDenied(e.to_string()))?;
        if !output.success {
            return Err(BootstrapError::ElevationDenied(output.status_text()));
        }

        Ok(RelaunchReport {
            exit_code: parse_exit_code(&output.stdout),
        })
    }
}

/// Last non-empty stdout line as an exit code.
fn parse_exit_code(stdout: &str) -> Option<i32> {
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .and_then(|l| l.parse().ok())
}

/// Broker for platforms without an elevation mechanism.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedPrivileges;

impl PrivilegeBroker for UnsupportedPrivileges {
    fn is_elevated(&self) -> bool {
        false
    }

    fn relaunch_elevated(&self) -> BootstrapResult<RelaunchReport> {
        Err(BootstrapError::windows_only())
    }
}
