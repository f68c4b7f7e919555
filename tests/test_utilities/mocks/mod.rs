/// Mock implementations for testing
mod mock_dashboard_api;
mod mock_progress_reporter;

pub use mock_dashboard_api::MockDashboardApi;
pub use mock_progress_reporter::MockProgressReporter;
