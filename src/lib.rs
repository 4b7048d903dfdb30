// src/lib.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat-text workload fixture generation
//!
//! This library produces:
//! - a workload file of fixed-width records: a quote, uniformly random
//!   lowercase letters from a Xoshiro256++ stream, a quote, a newline
//! - a metadata sidecar recording the workload's shape (line count, line
//!   length, and optionally total size and file name)
//!
//! Runs are unseeded by default; configuring a seed makes the output
//! reproducible byte for byte.

// Core modules
pub mod constants;
pub mod error;
pub mod generator;
pub mod meta;

// Re-export main API
pub use error::WorkloadError;
pub use generator::{write_workload, LineGenerator, WorkloadConfig, WorkloadSummary};
pub use meta::{write_meta, MetaField, MetaSchema, WorkloadMeta};
