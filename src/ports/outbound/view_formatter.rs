use crate::application::read_models::DashboardView;
use crate::dashboard::state::ViewState;
use crate::shared::Result;

/// ViewFormatter port for rendering a page
///
/// Formatters are pure: the same state always renders the same text.
pub trait ViewFormatter {
    /// Renders a page in whatever state it settled into
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, state: &ViewState<DashboardView>) -> Result<String>;
}
