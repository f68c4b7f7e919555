/// Data contracts exchanged with the Orbyte API
///
/// Every type here is a read-only projection of server state, replaced
/// wholesale on each fetch.
pub mod analysis;
pub mod control;
pub mod overview;
pub mod simulation;
pub mod sustainability;

pub use analysis::AnalysisResult;
pub use control::{Control, ControlSeverity, ControlStatus};
pub use overview::{
    CompliancePoint, EmissionsPoint, IssueKind, IssueSeverity, OverviewData, TopIssue,
};
pub use simulation::{SimulationRequest, SimulationResult, SimulationType};
pub use sustainability::{IdleResource, RegionEmissions, SustainabilityMetrics};
