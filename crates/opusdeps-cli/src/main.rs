//! CLI entry point.
//!
//! Exit status is 0 on success, including when the work was handed to an
//! elevated child process, and 1 on any failure.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use opusdeps_cli::{Cli, CliContext, completion_message};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Load .env before reading OPUSDEPS_* or RUST_LOG
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    let result = CliContext::from_env()
        .and_then(|context| context.run())
        .context("Build failed");

    match result {
        Ok(outcome) => {
            if let Some(message) = completion_message(&outcome) {
                println!("{message}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
