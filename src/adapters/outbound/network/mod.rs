/// Network adapters for the Orbyte API
mod http_dashboard_client;

pub use http_dashboard_client::HttpDashboardClient;
