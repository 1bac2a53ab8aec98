// Configuration structure for group/dataset name mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLayout {
    pub states_group: String,
    pub pressure: String,
    pub saturation: String,
    pub report_group: String,
    pub iterations: String,
    pub simulation_time: String,
}

impl ResultLayout {
    pub fn new() -> Self {
        ResultLayout {
            states_group: "statesStepSol".to_string(),
            pressure: "pressure".to_string(),
            saturation: "s".to_string(),
            report_group: "reportData".to_string(),
            iterations: "Iterations".to_string(),
            simulation_time: "SimulationTime".to_string(),
        }
    }
}

impl Default for ResultLayout {
    fn default() -> Self {
        Self::new()
    }
}
