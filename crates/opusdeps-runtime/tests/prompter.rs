//! Terminal prompter reading from stand-in device files.

use std::fs;

use opusdeps_core::ConsentPrompter;
use opusdeps_runtime::TerminalPrompter;
use tempfile::tempdir;

fn answer(content: &str) -> bool {
    let dir = tempdir().unwrap();
    let device = dir.path().join("tty");
    fs::write(&device, content).unwrap();
    TerminalPrompter::new(device).confirm("Proceed? (y/N)")
}

#[test]
fn test_yes_answers() {
    assert!(answer("y\n"));
    assert!(answer("YES\r\n"));
    assert!(answer("  yes  \nignored second line\n"));
}

#[test]
fn test_other_answers_are_no() {
    assert!(!answer("n\n"));
    assert!(!answer("\n"));
    assert!(!answer("sure\n"));
}

#[test]
fn test_end_of_stream_is_no() {
    assert!(!answer(""));
    assert!(!answer("y"));
}

#[test]
fn test_unopenable_device_is_no() {
    let dir = tempdir().unwrap();
    let prompter = TerminalPrompter::new(dir.path().join("no-such-tty"));
    assert!(!prompter.confirm("Would you like to install one now? (y/N)"));
}
