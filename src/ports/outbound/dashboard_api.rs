use crate::dashboard::domain::{
    AnalysisResult, Control, OverviewData, SimulationRequest, SimulationResult,
    SustainabilityMetrics,
};
use crate::shared::Result;
use async_trait::async_trait;

/// DashboardApi port for the Orbyte backend
///
/// One method per endpoint. Implementations must fail with
/// `DashboardError::RequestFailed` on any non-success status, transport
/// failure or undecodable body, and must never return a partially decoded
/// object. They do not retry.
///
/// # Async Support
/// Implementations must be `Send + Sync` so pages can issue fetches
/// concurrently against one client.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// `GET /overview`
    async fn fetch_overview(&self) -> Result<OverviewData>;

    /// `GET /compliance/controls`
    ///
    /// # Returns
    /// Controls in the order the server sent them
    async fn fetch_compliance_controls(&self) -> Result<Vec<Control>>;

    /// `POST /compliance/controls/{control_id}/analysis` with no body
    ///
    /// The backend runs an expensive AI-backed analysis; callers should not
    /// assume it is fast.
    async fn analyze_control(&self, control_id: &str) -> Result<AnalysisResult>;

    /// `GET /sustainability/metrics`
    async fn fetch_sustainability_metrics(&self) -> Result<SustainabilityMetrics>;

    /// `POST /simulations/run` with `request` as the JSON body
    async fn run_simulation(&self, request: &SimulationRequest) -> Result<SimulationResult>;
}
