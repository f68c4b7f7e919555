/// Read models - view-shaped projections of fetched contracts
///
/// Formatters render these; they never reach back to the API.
mod compliance_view;
mod dashboard_view;
mod simulation_report;
mod summary_view;

pub use compliance_view::ComplianceView;
pub use dashboard_view::DashboardView;
pub use simulation_report::SimulationReport;
pub use summary_view::SummaryView;
