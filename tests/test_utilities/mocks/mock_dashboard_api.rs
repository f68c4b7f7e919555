use async_trait::async_trait;
use orbyte_console::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::test_utilities::fixtures;

/// Mock DashboardApi for testing
///
/// Clones share the recorded calls, so a test can keep one handle while the
/// use case owns another.
#[derive(Clone, Default)]
pub struct MockDashboardApi {
    pub calls: Arc<Mutex<Vec<String>>>,
    failing: Arc<Mutex<Vec<String>>>,
    analysis_delays: Arc<Mutex<HashMap<String, Duration>>>,
}

impl MockDashboardApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the named operation fail (`overview`, `controls`, `analysis`,
    /// `sustainability` or `simulation`).
    pub fn with_failure(self, operation: &str) -> Self {
        self.failing.lock().unwrap().push(operation.to_string());
        self
    }

    /// Delays the analysis response for one control
    pub fn with_analysis_delay(self, control_id: &str, delay: Duration) -> Self {
        self.analysis_delays
            .lock()
            .unwrap()
            .insert(control_id.to_string(), delay);
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, operation: &str) -> Result<()> {
        if self.failing.lock().unwrap().iter().any(|op| op == operation) {
            return Err(DashboardError::request_failed(
                operation,
                "API returned status code 500 Internal Server Error",
            )
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl DashboardApi for MockDashboardApi {
    async fn fetch_overview(&self) -> Result<OverviewData> {
        self.record("overview".to_string());
        self.check("overview")?;
        Ok(serde_json::from_value(fixtures::overview_json())?)
    }

    async fn fetch_compliance_controls(&self) -> Result<Vec<Control>> {
        self.record("controls".to_string());
        self.check("controls")?;
        Ok(serde_json::from_value(fixtures::controls_json())?)
    }

    async fn analyze_control(&self, control_id: &str) -> Result<AnalysisResult> {
        self.record(format!("analysis:{}", control_id));
        let delay = self.analysis_delays.lock().unwrap().get(control_id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.check("analysis")?;
        Ok(serde_json::from_value(fixtures::analysis_json(control_id))?)
    }

    async fn fetch_sustainability_metrics(&self) -> Result<SustainabilityMetrics> {
        self.record("sustainability".to_string());
        self.check("sustainability")?;
        Ok(serde_json::from_value(fixtures::sustainability_json())?)
    }

    async fn run_simulation(&self, request: &SimulationRequest) -> Result<SimulationResult> {
        self.record(format!(
            "simulation:{}:{}",
            request.simulation_type, request.workload_percent
        ));
        self.check("simulation")?;
        Ok(serde_json::from_value(fixtures::simulation_json())?)
    }
}
