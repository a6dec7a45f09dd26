//! Hand-written port fakes shared by the flow tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use opusdeps_core::{
    Adapters, ArchiveExtractor, BootstrapError, BootstrapResult, CommandOutput, CommandRunner,
    CommandSpec, CompressionKind, ConsentPrompter, Fetcher, PathEntry, PathRegistry,
    PrivilegeBroker, RelaunchReport, StatusReporter,
};

/// Answers `pkg-config` from a script and succeeds every other command.
#[derive(Default)]
pub struct ScriptedRunner {
    pub probe_results: Mutex<VecDeque<bool>>,
    pub install_exit_code: i32,
    pub calls: Mutex<Vec<CommandSpec>>,
}

impl ScriptedRunner {
    pub fn with_probes(results: &[bool]) -> Self {
        Self {
            probe_results: Mutex::new(results.iter().copied().collect()),
            ..Self::default()
        }
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, spec: &CommandSpec) -> BootstrapResult<CommandOutput> {
        self.calls.lock().unwrap().push(spec.clone());
        if spec.program == "pkg-config" {
            let present = self.probe_results.lock().unwrap().pop_front().unwrap_or(false);
            return Ok(CommandOutput::exited(i32::from(!present)));
        }
        Ok(CommandOutput::exited(self.install_exit_code))
    }
}

/// Replies to consent questions from a script; runs out as "no".
#[derive(Default)]
pub struct ScriptedPrompter {
    pub answers: Mutex<VecDeque<bool>>,
    pub questions: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            questions: Mutex::new(Vec::new()),
        }
    }
}

impl ConsentPrompter for ScriptedPrompter {
    fn confirm(&self, question: &str) -> bool {
        self.questions.lock().unwrap().push(question.to_string());
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }
}

/// Collects every status line.
#[derive(Default)]
pub struct RecordingStatus {
    pub lines: Mutex<Vec<String>>,
}

impl RecordingStatus {
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().unwrap().iter().any(|l| l.contains(needle))
    }
}

impl StatusReporter for RecordingStatus {
    fn info(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("✓ {message}"));
    }

    fn warn(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("⚠ {message}"));
    }
}

/// Writes a placeholder file instead of downloading.
#[derive(Default)]
pub struct FakeFetcher {
    pub fail_with: Option<String>,
    pub urls: Mutex<Vec<String>>,
}

impl Fetcher for FakeFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> BootstrapResult<()> {
        self.urls.lock().unwrap().push(url.to_string());
        if let Some(status) = &self.fail_with {
            return Err(BootstrapError::Network(status.clone()));
        }
        fs::write(dest, b"bundle").map_err(|e| BootstrapError::io("failed to write", dest, e))
    }
}

/// Materialises a bundle layout under `<dest>/mingw64` instead of untarring.
#[derive(Default)]
pub struct FakeBundleExtractor {
    pub calls: AtomicUsize,
}

impl ArchiveExtractor for FakeBundleExtractor {
    fn extract(
        &self,
        _archive: &Path,
        compression: CompressionKind,
        dest: &Path,
    ) -> BootstrapResult<()> {
        assert_eq!(compression, CompressionKind::Zstd);
        self.calls.fetch_add(1, Ordering::SeqCst);
        let root = dest.join("mingw64");
        for (file, content) in [
            ("lib/libopus.a", "static"),
            ("lib/pkgconfig/opus.pc", "Name: Opus"),
            ("include/opus/opus.h", "#define OPUS_H"),
            ("bin/libopus-0.dll", "MZ"),
        ] {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        Ok(())
    }
}

pub struct FakePrivileges {
    pub elevated: bool,
    pub child_exit_code: Option<i32>,
    pub relaunches: AtomicUsize,
}

impl FakePrivileges {
    pub const fn new(elevated: bool) -> Self {
        Self {
            elevated,
            child_exit_code: Some(0),
            relaunches: AtomicUsize::new(0),
        }
    }
}

impl PrivilegeBroker for FakePrivileges {
    fn is_elevated(&self) -> bool {
        self.elevated
    }

    fn relaunch_elevated(&self) -> BootstrapResult<RelaunchReport> {
        self.relaunches.fetch_add(1, Ordering::SeqCst);
        Ok(RelaunchReport {
            exit_code: self.child_exit_code,
        })
    }
}

/// In-memory machine `Path`.
#[derive(Default)]
pub struct FakePathRegistry {
    pub value: Mutex<String>,
    pub read_only: bool,
}

impl FakePathRegistry {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Mutex::new(value.to_string()),
            read_only: false,
        }
    }
}

impl PathRegistry for FakePathRegistry {
    fn contains(&self, entry: &PathEntry) -> bool {
        entry.is_contained_in(&self.value.lock().unwrap())
    }

    fn append(&self, entry: &PathEntry) -> BootstrapResult<bool> {
        if self.read_only {
            return Err(BootstrapError::PathMutation(
                "Requested registry access is not allowed".to_string(),
            ));
        }
        let mut value = self.value.lock().unwrap();
        match entry.append_to(&value) {
            Some(updated) => {
                *value = updated;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Fakes wired into an `Adapters` container, kept reachable for assertions.
pub struct Harness {
    pub runner: Arc<ScriptedRunner>,
    pub prompter: Arc<ScriptedPrompter>,
    pub status: Arc<RecordingStatus>,
    pub fetcher: Arc<FakeFetcher>,
    pub extractor: Arc<FakeBundleExtractor>,
    pub privileges: Arc<FakePrivileges>,
    pub path_registry: Arc<FakePathRegistry>,
}

impl Harness {
    pub fn new(runner: ScriptedRunner, prompter: ScriptedPrompter) -> Self {
        Self {
            runner: Arc::new(runner),
            prompter: Arc::new(prompter),
            status: Arc::new(RecordingStatus::default()),
            fetcher: Arc::new(FakeFetcher::default()),
            extractor: Arc::new(FakeBundleExtractor::default()),
            privileges: Arc::new(FakePrivileges::new(true)),
            path_registry: Arc::new(FakePathRegistry::default()),
        }
    }

    pub fn windows(privileges: FakePrivileges, path_registry: FakePathRegistry) -> Self {
        Self {
            privileges: Arc::new(privileges),
            path_registry: Arc::new(path_registry),
            ..Self::new(ScriptedRunner::default(), ScriptedPrompter::default())
        }
    }

    pub fn adapters(&self) -> Adapters {
        Adapters {
            commands: self.runner.clone(),
            fetcher: self.fetcher.clone(),
            extractor: self.extractor.clone(),
            prompter: self.prompter.clone(),
            privileges: self.privileges.clone(),
            path_registry: self.path_registry.clone(),
            status: self.status.clone(),
        }
    }
}
