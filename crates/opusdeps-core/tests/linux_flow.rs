//! Linux backend resolution scenarios driven through the dispatcher.

mod common;

use std::fs;

use common::{Harness, ScriptedPrompter, ScriptedRunner};
use opusdeps_core::{BootstrapConfig, BootstrapError, BootstrapOutcome, Distro, Platform, bootstrap};
use tempfile::TempDir;

fn linux_config(os_release: &str) -> (TempDir, BootstrapConfig) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("os-release");
    fs::write(&path, os_release).unwrap();

    let mut config = BootstrapConfig::default().with_platform(Platform::Linux);
    config.os_release_path = path;
    (dir, config)
}

#[test]
fn test_present_backend_needs_no_consent() {
    let (_dir, config) = linux_config("ID=debian\n");
    let harness = Harness::new(ScriptedRunner::with_probes(&[true]), ScriptedPrompter::default());

    let outcome = bootstrap(&config, &harness.adapters()).unwrap();

    assert_eq!(
        outcome,
        BootstrapOutcome::BackendPresent {
            backend: "opus".to_string()
        }
    );
    assert_eq!(harness.runner.command_lines(), ["pkg-config --exists opus"]);
    assert!(harness.prompter.questions.lock().unwrap().is_empty());
    assert!(harness.fetcher.urls.lock().unwrap().is_empty());
}

#[test]
fn test_debian_double_consent_installs_and_reprobes() {
    let (_dir, config) = linux_config("PRETTY_NAME=\"Debian GNU/Linux 12 (bookworm)\"\nID=debian\n");
    let harness = Harness::new(
        ScriptedRunner::with_probes(&[false, true]),
        ScriptedPrompter::answering(&[true, true]),
    );

    let outcome = bootstrap(&config, &harness.adapters()).unwrap();

    assert_eq!(
        outcome,
        BootstrapOutcome::BackendInstalled {
            backend: "opus".to_string()
        }
    );
    assert_eq!(
        harness.runner.command_lines(),
        [
            "pkg-config --exists opus",
            "sudo apt install -y opus-tools libopus0 libopus-dev",
            "pkg-config --exists opus",
        ]
    );
    assert_eq!(harness.prompter.questions.lock().unwrap().len(), 2);
    assert!(harness.status.contains("sudo apt-get install opus-tools libopus0 libopus-dev"));
    assert!(harness.status.contains("Running: sudo apt install -y opus-tools libopus0 libopus-dev"));
    assert!(harness.status.contains("Installation successful! Retrying build..."));
    assert!(!harness.status.contains("failed to install"));
}

#[test]
fn test_declined_install_prompt_runs_nothing() {
    let (_dir, config) = linux_config("ID=arch\n");
    let harness = Harness::new(
        ScriptedRunner::with_probes(&[false]),
        ScriptedPrompter::answering(&[true, false]),
    );

    let err = bootstrap(&config, &harness.adapters()).unwrap_err();

    assert!(matches!(err, BootstrapError::ConsentDeclined(_)));
    assert_eq!(err.to_string(), "installation cancelled");
    assert_eq!(harness.runner.command_lines(), ["pkg-config --exists opus"]);
    assert!(harness.status.contains("Running: sudo pacman -S --noconfirm opus"));
    assert!(harness.status.contains("⚠ Opus failed to install"));
}

#[test]
fn test_unrecognised_distro_is_unsupported_without_subprocess() {
    let (_dir, config) = linux_config("NAME=\"Alpine Linux\"\nID=alpine\n");
    let harness = Harness::new(
        ScriptedRunner::with_probes(&[false]),
        ScriptedPrompter::answering(&[true]),
    );

    let err = bootstrap(&config, &harness.adapters()).unwrap_err();

    assert!(matches!(err, BootstrapError::DistroUnsupported(Distro::Unknown)));
    assert_eq!(harness.runner.command_lines(), ["pkg-config --exists opus"]);
    assert!(harness.status.contains("- libopus"));
    assert!(harness.status.contains("⚠ Opus failed to install"));
}

#[test]
fn test_failed_package_manager_is_reported() {
    let (_dir, config) = linux_config("ID=fedora\n");
    let runner = ScriptedRunner {
        install_exit_code: 1,
        ..ScriptedRunner::with_probes(&[false])
    };
    let harness = Harness::new(runner, ScriptedPrompter::answering(&[true, true]));

    let err = bootstrap(&config, &harness.adapters()).unwrap_err();

    assert!(matches!(err, BootstrapError::PackageManager(_)));
    assert_eq!(err.to_string(), "installation failed: exit code 1");
    assert_eq!(
        harness.runner.command_lines(),
        [
            "pkg-config --exists opus",
            "sudo dnf install -y opus-devel opusfile-devel",
        ]
    );
}
