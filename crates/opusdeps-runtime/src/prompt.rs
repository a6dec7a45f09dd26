//! Consent prompts read from the controlling terminal.
//!
//! Build tools often run with stdin detached from the terminal, so answers
//! are read from the terminal device directly.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use opusdeps_core::{ConsentPrompter, parse_consent};
use tracing::debug;

/// Prompter that prints to stdout and reads one line from a terminal device.
#[derive(Debug, Clone)]
pub struct TerminalPrompter {
    device: PathBuf,
}

impl TerminalPrompter {
    pub fn new(device: impl Into<PathBuf>) -> Self {
        Self {
            device: device.into(),
        }
    }

    /// Read one answer line. `None` when the device is unusable or the
    /// stream ends before a full line.
    fn read_answer(&self) -> Option<String> {
        let tty = match File::open(&self.device) {
            Ok(tty) => tty,
            Err(e) => {
                debug!(device = %self.device.display(), "cannot open terminal: {e}");
                println!(
                    "\nCouldn't open the terminal input, try installing the dependency yourself with the previously mentioned command."
                );
                return None;
            }
        };

        let mut line = String::new();
        match BufReader::new(tty).read_line(&mut line) {
            Ok(_) if line.ends_with('\n') => Some(line),
            Ok(_) => None,
            Err(e) => {
                debug!(device = %self.device.display(), "cannot read terminal: {e}");
                None
            }
        }
    }
}

impl ConsentPrompter for TerminalPrompter {
    fn confirm(&self, question: &str) -> bool {
        println!("{question}");
        self.read_answer().is_some_and(|line| parse_consent(&line))
    }
}
