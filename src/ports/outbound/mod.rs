/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (the Orbyte API, console, file system).
pub mod dashboard_api;
pub mod output_presenter;
pub mod progress_reporter;
pub mod view_formatter;

pub use dashboard_api::DashboardApi;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use view_formatter::ViewFormatter;
