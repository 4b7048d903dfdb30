// src/constants.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Alphabet records draw their payload from (26 lowercase Latin letters)
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Quote byte wrapping every record at position 0 and `line_length - 1`
pub const QUOTE: u8 = b'"';

/// Record terminator
pub const NEWLINE: u8 = b'\n';

/// Default number of records (the large workload shape)
pub const DEFAULT_LINES: u64 = 10_000_000;

/// Default characters per record, quotes included
pub const DEFAULT_LINE_LENGTH: usize = 100;

/// Default workload file name
pub const WORKLOAD_FILE: &str = "workload.txt";

/// Default metadata sidecar name
pub const META_FILE: &str = "workload.meta";

/// Buffered-writer capacity for workload output (1 MiB)
pub const WRITE_BUF_SIZE: usize = 1024 * 1024;

/// Lines between progress log messages during generation
pub const PROGRESS_INTERVAL: u64 = 1_000_000;
