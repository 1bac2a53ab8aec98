//! Readers for simulation result files stored as HDF5.
//!
//! The producer writes two groups:
//!
//! ```text
//! /statesStepSol/pressure     numeric array
//! /statesStepSol/s            numeric array
//! /reportData/Iterations      numeric scalar
//! /reportData/SimulationTime  numeric scalar
//! ```
//!
//! Each reader opens the file, reads what it needs and closes the file
//! before returning.

pub mod config;
pub mod error;
pub mod io;
pub mod summary;

use std::path::Path;

pub use config::ResultLayout;
pub use error::{Result, ResultsError};
pub use io::results::{Report, States};

/// Read the pressure and saturation arrays from `statesStepSol`.
pub fn states(path: impl AsRef<Path>) -> Result<States> {
    states_with_layout(path, &ResultLayout::new())
}

/// Read `Iterations` and `SimulationTime` from `reportData`.
pub fn reports(path: impl AsRef<Path>) -> Result<Report> {
    reports_with_layout(path, &ResultLayout::new())
}

pub fn states_with_layout(path: impl AsRef<Path>, layout: &ResultLayout) -> Result<States> {
    io::h5::read_states(path.as_ref(), layout)
}

pub fn reports_with_layout(path: impl AsRef<Path>, layout: &ResultLayout) -> Result<Report> {
    io::h5::read_report(path.as_ref(), layout)
}
