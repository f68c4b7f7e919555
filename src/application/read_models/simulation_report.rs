use crate::dashboard::domain::{SimulationRequest, SimulationResult};
use serde::Serialize;

/// Scenario simulation page: the submitted request next to the estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub request: SimulationRequest,
    pub result: SimulationResult,
}
