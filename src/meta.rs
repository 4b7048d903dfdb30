// src/meta.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metadata sidecar describing a generated workload file
//!
//! Consumers read the sidecar to learn the workload's shape without
//! scanning the workload itself. The layout is an ordered field list, so
//! the two-field and four-field variants share one writer.
//!
//! `file_size` records `lines * line_length`; newline terminators are not
//! counted, so the workload file on disk is one byte per record larger.
//! The recorded value is the contract and is never recomputed from disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::WorkloadError;
use crate::generator::WorkloadConfig;

/// A single field of the metadata sidecar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    /// Number of records in the workload file
    Lines,
    /// Characters per record, quotes included
    LineLength,
    /// Total characters: `lines * line_length`
    FileSize,
    /// Name of the workload file the sidecar describes
    FileName,
}

/// Ordered field list defining a sidecar layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaSchema {
    fields: Vec<MetaField>,
}

impl MetaSchema {
    /// Two-field layout: line count and line length
    pub fn basic() -> Self {
        Self {
            fields: vec![MetaField::Lines, MetaField::LineLength],
        }
    }

    /// Four-field layout adding total size and workload file name
    pub fn extended() -> Self {
        Self {
            fields: vec![
                MetaField::Lines,
                MetaField::LineLength,
                MetaField::FileSize,
                MetaField::FileName,
            ],
        }
    }

    /// Custom layout with caller-chosen field order
    pub fn new(fields: Vec<MetaField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[MetaField] {
        &self.fields
    }
}

/// Values recorded in the sidecar, captured once per generation run
#[derive(Debug, Clone)]
pub struct WorkloadMeta {
    pub lines: u64,
    pub line_length: usize,
    pub file_size: u64,
    pub file_name: String,
}

impl WorkloadMeta {
    /// Snapshot the values for a configuration and workload file name
    pub fn for_config(config: &WorkloadConfig, file_name: &str) -> Self {
        Self {
            lines: config.lines,
            line_length: config.line_length,
            file_size: config.file_size(),
            file_name: file_name.to_string(),
        }
    }

    fn render(&self, field: MetaField) -> String {
        match field {
            MetaField::Lines => self.lines.to_string(),
            MetaField::LineLength => self.line_length.to_string(),
            MetaField::FileSize => self.file_size.to_string(),
            MetaField::FileName => self.file_name.clone(),
        }
    }
}

/// Write the sidecar at `path`, one field per line in schema order
pub fn write_meta<P: AsRef<Path>>(
    meta: &WorkloadMeta,
    schema: &MetaSchema,
    path: P,
) -> Result<(), WorkloadError> {
    let path = path.as_ref();

    tracing::info!(
        "Writing metadata {}: {} fields",
        path.display(),
        schema.fields().len()
    );

    let file = File::create(path).map_err(|e| WorkloadError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for &field in schema.fields() {
        writeln!(writer, "{}", meta.render(field)).map_err(|e| WorkloadError::io(path, e))?;
    }
    writer.flush().map_err(|e| WorkloadError::io(path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(lines: u64, line_length: usize) -> WorkloadConfig {
        WorkloadConfig {
            lines,
            line_length,
            seed: None,
        }
    }

    #[test]
    fn basic_schema_records_count_and_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workload.meta");
        let meta = WorkloadMeta::for_config(&config(3, 5), "workload.txt");

        write_meta(&meta, &MetaSchema::basic(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "3\n5\n");
    }

    #[test]
    fn extended_schema_adds_size_and_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workload.meta");
        let meta = WorkloadMeta::for_config(&config(10_000_000, 100), "workload.txt");

        write_meta(&meta, &MetaSchema::extended(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, ["10000000", "100", "1000000000", "workload.txt"]);
    }

    #[test]
    fn custom_schema_preserves_field_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workload.meta");
        let meta = WorkloadMeta::for_config(&config(3, 5), "workload.txt");
        let schema = MetaSchema::new(vec![MetaField::FileName, MetaField::Lines]);

        write_meta(&meta, &schema, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "workload.txt\n3\n");
    }

    #[test]
    fn file_size_is_recorded_without_newlines() {
        let meta = WorkloadMeta::for_config(&config(10, 100), "workload.txt");
        assert_eq!(meta.file_size, 1_000);
    }
}
