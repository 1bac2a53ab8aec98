use crate::io::results::States;
use anyhow::{Context, Result, bail};
use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const STATES_HEADER: [&str; 3] = ["index", "pressure", "saturation"];

// Create CSV writer with headers
pub fn create_csv_writer(path: &Path) -> Result<Writer<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to create CSV file: {:?}", path))?;
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(file);

    // Write header
    wtr.write_record(STATES_HEADER)?;

    Ok(wtr)
}

// Write both state arrays side by side, flattened in row-major order
pub fn write_states<W: Write>(wtr: &mut Writer<W>, states: &States) -> Result<usize> {
    if states.pressure.len() != states.saturation.len() {
        bail!(
            "pressure has {} values but saturation has {}",
            states.pressure.len(),
            states.saturation.len()
        );
    }

    let mut rows = 0;
    for (i, (p, s)) in states
        .pressure
        .iter()
        .zip(states.saturation.iter())
        .enumerate()
    {
        wtr.write_record(&[i.to_string(), p.to_string(), s.to_string()])?;
        rows += 1;
    }

    wtr.flush().context("Failed to flush CSV writer")?;
    Ok(rows)
}

pub fn write_states_csv(path: &Path, states: &States) -> Result<usize> {
    let mut wtr = create_csv_writer(path)?;
    write_states(&mut wtr, states).with_context(|| format!("Failed to export states to {:?}", path))
}
