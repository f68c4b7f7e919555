/// Use cases module - one per dashboard page
mod analyze_control;
mod load_compliance;
mod load_overview;
mod load_summary;
mod load_sustainability;
mod page;
mod run_simulation;

pub use analyze_control::AnalyzeControlUseCase;
pub use load_compliance::LoadComplianceUseCase;
pub use load_overview::LoadOverviewUseCase;
pub use load_summary::LoadSummaryUseCase;
pub use load_sustainability::LoadSustainabilityUseCase;
pub use run_simulation::RunSimulationUseCase;
