//! Blocking HTTP download with a terminal progress bar.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use opusdeps_core::{BootstrapError, BootstrapResult, Fetcher};
use reqwest::blocking::Client;
use tracing::debug;

const USER_AGENT: &str = concat!("opusdeps/", env!("CARGO_PKG_VERSION"));

/// Downloads with a single GET; no timeout, retry or resume.
pub struct HttpFetcher {
    client: Client,
    show_progress: bool,
}

impl HttpFetcher {
    /// Fetcher with the request timeout disabled and a progress bar.
    pub fn new() -> BootstrapResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| BootstrapError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client))
    }

    pub const fn with_client(client: Client) -> Self {
        Self {
            client,
            show_progress: true,
        }
    }

    #[must_use]
    pub const fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    fn progress_bar(&self, total: Option<u64>) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let Some(total) = total else {
            return ProgressBar::new_spinner();
        };
        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})",
        ) {
            pb.set_style(style.progress_chars("█▓░"));
        }
        pb
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> BootstrapResult<()> {
        debug!(url, dest = %dest.display(), "downloading");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| BootstrapError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BootstrapError::Network(format!("HTTP {status}")));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| BootstrapError::io("failed to create", parent, e))?;
        }
        let mut file =
            File::create(dest).map_err(|e| BootstrapError::io("failed to create", dest, e))?;

        let pb = self.progress_bar(response.content_length());
        let mut body = pb.wrap_read(response);
        let written = io::copy(&mut body, &mut file).map_err(|e| {
            pb.abandon();
            BootstrapError::Network(format!("error reading download stream: {e}"))
        })?;
        pb.finish_and_clear();

        debug!(url, bytes = written, "download complete");
        Ok(())
    }
}
