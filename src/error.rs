// src/error.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by workload generation
///
/// Configuration errors are raised before any file is touched; I/O errors
/// are fatal and may leave a partial output file behind.
#[derive(Debug, Error)]
pub enum WorkloadError {
    /// Records carry a quote at both ends, so they need at least two characters
    #[error("line length {line_length} is too short: records need room for both quotes")]
    LineLengthTooSmall { line_length: usize },

    #[error("workload must contain at least one line")]
    EmptyWorkload,

    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WorkloadError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
