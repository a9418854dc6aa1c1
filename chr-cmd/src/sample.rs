//! Writing the demo dataset to disk.

use anyhow::Context;
use chr_core::record::write_health_csv;
use chr_data::demo;
use log::info;
use std::fs::File;
use std::io::BufWriter;

/// Generate the demo dataset with `seed` and write it as a health CSV.
pub fn run_sample(output: &str, seed: u64) -> anyhow::Result<()> {
    let records = demo::generate(seed);
    let file = File::create(output).with_context(|| format!("cannot create {}", output))?;
    write_health_csv(&records, BufWriter::new(file))?;
    info!("Wrote {} sample records to {}", records.len(), output);
    Ok(())
}
