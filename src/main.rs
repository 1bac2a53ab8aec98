use anyhow::{Context, Result};
use chrono::TimeDelta;
use std::path::Path;

mod cli;

use cli::{Args, get_args};
use sim_results::io::csv::write_states_csv;
use sim_results::summary::Summary;
use sim_results::{Report, States};

fn main() -> Result<()> {
    let args = get_args();
    init_logger(args.verbose);

    run(&args)
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(args: &Args) -> Result<()> {
    let path = &args.result_file;
    println!("Result file: {}", path.display());

    if !args.states_only {
        let report = read_report(path)?;
        print_report(&report);
    }

    if !args.report_only {
        let states = read_states(path)?;
        print_states(&states);

        if let Some(out) = &args.csv {
            let rows = write_states_csv(out, &states)?;
            println!("\n{} rows saved to {}", rows, out.display());
        }
    }

    Ok(())
}

fn read_report(path: &Path) -> Result<Report> {
    sim_results::reports(path)
        .with_context(|| format!("Failed to read report from {:?}", path))
}

fn read_states(path: &Path) -> Result<States> {
    sim_results::states(path)
        .with_context(|| format!("Failed to read states from {:?}", path))
}

fn print_report(report: &Report) {
    println!("\nSimulation report:");
    println!("  Iterations: {}", report.iterations);
    match report.simulation_duration() {
        Some(duration) => println!(
            "  Simulation time: {} s ({})",
            report.simulation_time,
            format_duration(duration)
        ),
        None => println!("  Simulation time: {} s", report.simulation_time),
    }
}

fn print_states(states: &States) {
    println!("\nStates:");
    print_field("pressure", &states.pressure);
    print_field("saturation", &states.saturation);
}

fn print_field(name: &str, values: &ndarray::ArrayD<f64>) {
    match Summary::of(values) {
        Some(s) => println!(
            "  {:<10} shape {:?}  min {:.6e}  max {:.6e}  mean {:.6e}",
            name,
            values.shape(),
            s.min,
            s.max,
            s.mean
        ),
        None => println!("  {:<10} shape {:?}  (no values)", name, values.shape()),
    }
}

fn format_duration(duration: TimeDelta) -> String {
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;
    let seconds = (duration.num_milliseconds() % 60_000) as f64 / 1000.0;
    format!("{}h {:02}m {:06.3}s", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_split_into_units() {
        let duration = TimeDelta::milliseconds(3_723_500);
        assert_eq!(format_duration(duration), "1h 02m 03.500s");
    }

    #[test]
    fn short_duration() {
        assert_eq!(format_duration(TimeDelta::milliseconds(3500)), "0h 00m 03.500s");
    }
}
