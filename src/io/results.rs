use chrono::TimeDelta;
use ndarray::ArrayD;

// Pressure and saturation fields as stored under the states group
#[derive(Debug, Clone, PartialEq)]
pub struct States {
    pub pressure: ArrayD<f64>,
    pub saturation: ArrayD<f64>,
}

impl States {
    pub fn new(pressure: ArrayD<f64>, saturation: ArrayD<f64>) -> Self {
        States {
            pressure,
            saturation,
        }
    }

    pub fn shape(&self) -> &[usize] {
        self.pressure.shape()
    }

    pub fn len(&self) -> usize {
        self.pressure.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressure.is_empty()
    }
}

// Summary statistics of a simulation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub iterations: i64,
    pub simulation_time: f64,
}

impl Report {
    pub fn new(iterations: i64, simulation_time: f64) -> Self {
        Report {
            iterations,
            simulation_time,
        }
    }

    /// Simulation time in seconds as a duration, truncated to milliseconds.
    pub fn simulation_duration(&self) -> Option<TimeDelta> {
        if !self.simulation_time.is_finite() || self.simulation_time < 0.0 {
            return None;
        }
        let millis = self.simulation_time * 1000.0;
        if millis > i64::MAX as f64 {
            return None;
        }
        TimeDelta::try_milliseconds(millis as i64)
    }
}
