//! Console status output.

use opusdeps_core::StatusReporter;

/// Prints status lines to stdout, keeping stderr for diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleStatus;

impl StatusReporter for ConsoleStatus {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn success(&self, message: &str) {
        println!("✓ {message}");
    }

    fn warn(&self, message: &str) {
        println!("⚠ {message}");
    }
}
