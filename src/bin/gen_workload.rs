// src/bin/gen_workload.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Stand-alone workload producer: writes workload.txt and workload.meta
// in the current directory. Runs the large preset when invoked with no
// arguments; `gen-workload small` selects the small one.

use std::time::Instant;

use anyhow::{bail, Context};

use workload_gen::constants::{DEFAULT_LINES, DEFAULT_LINE_LENGTH, META_FILE, WORKLOAD_FILE};
use workload_gen::{write_meta, write_workload, MetaSchema, WorkloadConfig, WorkloadMeta};

/// A preset pairing a generation shape with its sidecar layout
struct Preset {
    name: &'static str,
    lines: u64,
    line_length: usize,
    extended_meta: bool,
}

const LARGE: Preset = Preset {
    name: "large",
    lines: DEFAULT_LINES,
    line_length: DEFAULT_LINE_LENGTH,
    extended_meta: true,
};

const SMALL: Preset = Preset {
    name: "small",
    lines: 1_000,
    line_length: DEFAULT_LINE_LENGTH,
    extended_meta: false,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let preset = match std::env::args().nth(1).as_deref() {
        None | Some("large") => LARGE,
        Some("small") => SMALL,
        Some(other) => bail!("unknown preset {other:?}, expected \"large\" or \"small\""),
    };

    let config = WorkloadConfig {
        lines: preset.lines,
        line_length: preset.line_length,
        seed: None,
    };

    println!("Generating {} ({} preset)", WORKLOAD_FILE, preset.name);
    let start = Instant::now();
    let summary = write_workload(&config, WORKLOAD_FILE)
        .with_context(|| format!("generating {WORKLOAD_FILE}"))?;
    println!(
        "Done in {:.2} seconds ({} lines, {} bytes)",
        start.elapsed().as_secs_f64(),
        summary.lines,
        summary.bytes_written
    );

    let schema = if preset.extended_meta {
        MetaSchema::extended()
    } else {
        MetaSchema::basic()
    };
    let meta = WorkloadMeta::for_config(&config, WORKLOAD_FILE);
    write_meta(&meta, &schema, META_FILE).with_context(|| format!("writing {META_FILE}"))?;
    println!("Done generating meta file");

    Ok(())
}
