//! Command-line definition.

use clap::Parser;

/// Ensure the native Opus library is installed and reachable before a build.
///
/// On Linux the backend is found with pkg-config and can be installed through
/// the system package manager. On Windows a prebuilt bundle is installed
/// under the system install root and added to the machine PATH.
#[derive(Debug, Parser)]
#[command(name = "opusdeps")]
#[command(version)]
pub struct Cli {}
