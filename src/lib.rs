//! orbyte-console - terminal client for the Orbyte compliance and sustainability API
//!
//! This library fetches dashboard data from an Orbyte backend, derives the
//! compliance view locally and renders each page as Markdown or JSON,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dashboard`): Data contracts, view state and compliance scoring
//! - **Application Layer** (`application`): Page use cases, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use orbyte_console::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let api = HttpDashboardClient::new("http://localhost:8000/api")?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case and load the page
//! let use_case = LoadComplianceUseCase::new(api, progress_reporter);
//! let state = use_case.execute().await.map(DashboardView::Compliance);
//!
//! // Format output
//! let formatter = MarkdownFormatter::new();
//! println!("{}", formatter.format(&state)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dashboard;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::HttpDashboardClient;
    pub use crate::application::dto::OutputFormat;
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::read_models::{
        ComplianceView, DashboardView, SimulationReport, SummaryView,
    };
    pub use crate::application::use_cases::{
        AnalyzeControlUseCase, LoadComplianceUseCase, LoadOverviewUseCase, LoadSummaryUseCase,
        LoadSustainabilityUseCase, RunSimulationUseCase,
    };
    pub use crate::dashboard::domain::{
        AnalysisResult, Control, ControlSeverity, ControlStatus, OverviewData, SimulationRequest,
        SimulationResult, SimulationType, SustainabilityMetrics,
    };
    pub use crate::dashboard::services::{FrameworkScore, FrameworkScorer, OpenRisks};
    pub use crate::dashboard::state::{LatestSlot, ViewState};
    pub use crate::ports::outbound::{
        DashboardApi, OutputPresenter, ProgressReporter, ViewFormatter,
    };
    pub use crate::shared::error::DashboardError;
    pub use crate::shared::Result;
}
