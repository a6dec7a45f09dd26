//! Subprocess port.
//!
//! Services describe the command they need; adapters decide how to spawn it.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::BootstrapResult;

/// How the child's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdioMode {
    /// Share the parent's terminal (interactive commands like `sudo`).
    #[default]
    Inherit,
    /// Capture stdout, discard stderr.
    Capture,
    /// Discard everything; only the exit status matters.
    Quiet,
}

/// A command to run to completion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Extra environment variables for the child only.
    pub envs: BTreeMap<String, String>,
    pub stdio: StdioMode,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub const fn stdio(mut self, stdio: StdioMode) -> Self {
        self.stdio = stdio;
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How a finished command exited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub success: bool,
    /// `None` when the child was killed by a signal.
    pub code: Option<i32>,
    /// Captured stdout; empty unless `StdioMode::Capture` was requested.
    pub stdout: String,
}

impl CommandOutput {
    pub fn exited(code: i32) -> Self {
        Self {
            success: code == 0,
            code: Some(code),
            stdout: String::new(),
        }
    }

    #[must_use]
    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self
    }

    /// Human-readable exit description for error messages.
    pub fn status_text(&self) -> String {
        self.code
            .map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}"))
    }
}

/// Runs external programs synchronously.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `spec` to completion.
    ///
    /// Returns `Err(BootstrapError::Command)` only when the program could not
    /// be spawned; a non-zero exit is reported through `CommandOutput`.
    fn run(&self, spec: &CommandSpec) -> BootstrapResult<CommandOutput>;
}
