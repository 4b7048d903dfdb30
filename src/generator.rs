// src/generator.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Streaming generation of quoted random-letter records
//!
//! Records are fixed width: a quote, `line_length - 2` lowercase letters
//! drawn uniformly from a Xoshiro256++ stream, a quote, a newline. The
//! generator hands records out one at a time into a caller-owned buffer;
//! [`write_workload`] drives it through a buffered file writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::constants::*;
use crate::error::WorkloadError;

/// Configuration for workload generation
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Number of records to produce
    pub lines: u64,
    /// Total characters per record, quotes included (must be >= 2)
    pub line_length: usize,
    /// Random seed for reproducible content (None = use time + urandom)
    pub seed: Option<u64>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            lines: DEFAULT_LINES,
            line_length: DEFAULT_LINE_LENGTH,
            seed: None, // Use time + urandom
        }
    }
}

impl WorkloadConfig {
    /// Reject impossible shapes before any I/O begins
    pub fn validate(&self) -> Result<(), WorkloadError> {
        if self.line_length < 2 {
            return Err(WorkloadError::LineLengthTooSmall {
                line_length: self.line_length,
            });
        }
        if self.lines == 0 {
            return Err(WorkloadError::EmptyWorkload);
        }
        Ok(())
    }

    /// Characters recorded in the metadata sidecar: `lines * line_length`
    ///
    /// Newline terminators are not counted, so the on-disk file is one byte
    /// per record larger; see [`disk_size`](Self::disk_size).
    pub fn file_size(&self) -> u64 {
        self.lines * self.line_length as u64
    }

    /// Bytes the workload file occupies on disk, newlines included
    pub fn disk_size(&self) -> u64 {
        self.lines * (self.line_length as u64 + 1)
    }
}

/// Streaming record generator
///
/// The caller owns the buffer: each [`fill_line`](Self::fill_line) call
/// writes one complete record into it and returns its length, or 0 once
/// the configured number of records has been produced.
pub struct LineGenerator {
    rng: Xoshiro256PlusPlus,
    lines_total: u64,
    lines_emitted: u64,
    line_length: usize,
}

impl LineGenerator {
    /// Create a generator, validating the configuration first
    pub fn new(config: &WorkloadConfig) -> Result<Self, WorkloadError> {
        config.validate()?;

        // Use provided seed or generate entropy from time + urandom
        let call_entropy = config.seed.unwrap_or_else(generate_call_entropy);

        tracing::debug!(
            "Creating LineGenerator: lines={}, line_length={}, {}",
            config.lines,
            config.line_length,
            if config.seed.is_some() {
                "deterministic"
            } else {
                "non-deterministic"
            }
        );

        Ok(Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(call_entropy),
            lines_total: config.lines,
            lines_emitted: 0,
            line_length: config.line_length,
        })
    }

    /// Record length in bytes, newline terminator included
    pub fn record_len(&self) -> usize {
        self.line_length + 1
    }

    /// Fill `buf` with the next record
    ///
    /// Returns the number of bytes written (always `record_len()`), or 0
    /// when generation is complete. `buf` must hold at least
    /// `record_len()` bytes.
    pub fn fill_line(&mut self, buf: &mut [u8]) -> usize {
        if self.lines_emitted >= self.lines_total {
            return 0;
        }

        let n = self.line_length;
        let record = &mut buf[..n + 1];
        record[0] = QUOTE;
        for slot in &mut record[1..n - 1] {
            *slot = ALPHABET[self.rng.random_range(0..ALPHABET.len())];
        }
        record[n - 1] = QUOTE;
        record[n] = NEWLINE;

        self.lines_emitted += 1;
        n + 1
    }

    /// Number of records produced so far
    pub fn lines_emitted(&self) -> u64 {
        self.lines_emitted
    }

    /// Check if all configured records have been produced
    pub fn is_complete(&self) -> bool {
        self.lines_emitted >= self.lines_total
    }
}

/// What a generation run produced
#[derive(Debug, Clone)]
pub struct WorkloadSummary {
    pub lines: u64,
    pub bytes_written: u64,
    pub elapsed: Duration,
}

/// Generate the workload file at `path`
///
/// Truncates any existing file, writes one record at a time through a
/// buffered writer, and flushes before returning. On error the partial
/// file is left behind.
pub fn write_workload<P: AsRef<Path>>(
    config: &WorkloadConfig,
    path: P,
) -> Result<WorkloadSummary, WorkloadError> {
    let path = path.as_ref();
    let mut generator = LineGenerator::new(config)?;

    tracing::info!(
        "Generating {}: lines={}, line_length={}",
        path.display(),
        config.lines,
        config.line_length
    );

    let start = Instant::now();
    let file = File::create(path).map_err(|e| WorkloadError::io(path, e))?;
    let mut writer = BufWriter::with_capacity(WRITE_BUF_SIZE, file);
    let mut record = vec![0u8; generator.record_len()];
    let mut bytes_written = 0u64;

    loop {
        let nbytes = generator.fill_line(&mut record);
        if nbytes == 0 {
            break;
        }
        writer
            .write_all(&record[..nbytes])
            .map_err(|e| WorkloadError::io(path, e))?;
        bytes_written += nbytes as u64;

        if generator.lines_emitted() % PROGRESS_INTERVAL == 0 {
            tracing::debug!(
                "Wrote {} of {} lines",
                generator.lines_emitted(),
                config.lines
            );
        }
    }

    writer.flush().map_err(|e| WorkloadError::io(path, e))?;
    let elapsed = start.elapsed();

    tracing::info!(
        "Finished {}: {} bytes in {:.2}s",
        path.display(),
        bytes_written,
        elapsed.as_secs_f64()
    );

    Ok(WorkloadSummary {
        lines: generator.lines_emitted(),
        bytes_written,
        elapsed,
    })
}

/// Generate per-call entropy from time + urandom
fn generate_call_entropy() -> u64 {
    let time_entropy = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;

    let urandom_entropy: u64 = {
        let mut rng = rand::rng();
        rng.next_u64()
    };

    time_entropy.wrapping_add(urandom_entropy)
}
