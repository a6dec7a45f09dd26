//! Command-line adapter for the opusdeps bootstrapper.

#![deny(unused_crate_dependencies)]

// Only used by the binary target
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod parser;

pub use bootstrap::{CliContext, completion_message};
pub use parser::Cli;
