//! Synchronous subprocess execution.

use std::io;
use std::process::{Command, ExitStatus, Stdio};

use opusdeps_core::{
    BootstrapError, BootstrapResult, CommandOutput, CommandRunner, CommandSpec, StdioMode,
};
use tracing::debug;

/// Runs commands with `std::process`, resolving the program through `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub const fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> BootstrapResult<CommandOutput> {
        let spawn_failed = |reason: String| BootstrapError::Command {
            program: spec.program.clone(),
            reason,
        };

        let program = which::which(&spec.program).map_err(|e| spawn_failed(e.to_string()))?;
        let mut cmd = Command::new(&program);
        cmd.args(&spec.args).envs(&spec.envs);

        debug!(command = %spec, program = %program.display(), "running command");
        let output = match spec.stdio {
            StdioMode::Inherit => from_status(cmd.status()),
            StdioMode::Quiet => from_status(
                cmd.stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status(),
            ),
            StdioMode::Capture => cmd
                .stdin(Stdio::null())
                .stderr(Stdio::null())
                .output()
                .map(|out| {
                    from_exit(out.status)
                        .with_stdout(String::from_utf8_lossy(&out.stdout).into_owned())
                }),
        }
        .map_err(|e| spawn_failed(e.to_string()))?;

        debug!(command = %spec, status = %output.status_text(), "command finished");
        Ok(output)
    }
}

fn from_status(status: io::Result<ExitStatus>) -> io::Result<CommandOutput> {
    status.map(from_exit)
}

fn from_exit(status: ExitStatus) -> CommandOutput {
    CommandOutput {
        success: status.success(),
        code: status.code(),
        stdout: String::new(),
    }
}
