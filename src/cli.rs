use clap::Parser;
use std::path::PathBuf;

/// Inspect the states and run report stored in a simulation result file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// HDF5 result file written by the simulator
    pub result_file: PathBuf,

    /// Also export the state arrays to this CSV file
    #[arg(long, value_name = "OUT", conflicts_with = "report_only")]
    pub csv: Option<PathBuf>,

    /// Only read the states group
    #[arg(long, conflicts_with = "report_only")]
    pub states_only: bool,

    /// Only read the report group
    #[arg(long)]
    pub report_only: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn get_args() -> Args {
    Args::parse()
}
