//! Compressed tape archives acquired during installation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Compression codec wrapping a tar stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompressionKind {
    Gzip,
    Zstd,
}

impl CompressionKind {
    /// Conventional file extension for a tar stream with this codec.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Gzip => "tar.gz",
            Self::Zstd => "tar.zst",
        }
    }
}

impl fmt::Display for CompressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gzip => f.write_str("gzip"),
            Self::Zstd => f.write_str("zstd"),
        }
    }
}

/// A downloaded archive and where it unpacks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    pub source_url: String,
    pub local_path: PathBuf,
    pub compression: CompressionKind,
    pub destination_dir: PathBuf,
}
