use crate::dashboard::domain::{
    AnalysisResult, Control, OverviewData, SimulationRequest, SimulationResult,
    SustainabilityMetrics,
};
use crate::ports::outbound::DashboardApi;
use crate::shared::error::DashboardError;
use crate::shared::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// HttpDashboardClient adapter for the Orbyte REST API
///
/// This adapter implements the DashboardApi port over reqwest. Every call
/// shares one failure policy: a non-success status, a transport error or an
/// undecodable body becomes `DashboardError::RequestFailed`.
///
/// # Policy
/// - No client timeout: analysis runs server-side and can be slow
/// - No retries or backoff
/// - No authentication header
pub struct HttpDashboardClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDashboardClient {
    /// Creates a client for `base_url`, the API root including `/api`
    /// (e.g. `http://localhost:8000/api`).
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Self::validate_base_url(base_url)?;
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("orbyte-console/{}", version);
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Normalizes the base URL, rejecting anything that is not absolute http(s)
    fn validate_base_url(base_url: &str) -> Result<String> {
        let parsed = Url::parse(base_url).map_err(|e| DashboardError::InvalidConfig {
            path: "api_base_url".to_string(),
            reason: format!("'{}' is not a valid URL: {}", base_url, e),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DashboardError::InvalidConfig {
                path: "api_base_url".to_string(),
                reason: format!(
                    "'{}' uses unsupported scheme '{}'; expected http or https",
                    base_url,
                    parsed.scheme()
                ),
            }
            .into());
        }

        Ok(base_url.trim_end_matches('/').to_string())
    }

    /// Validates a control id before it is placed in a URL path
    fn validate_control_id(control_id: &str) -> Result<()> {
        if control_id.trim().is_empty() {
            return Err(DashboardError::Validation {
                message: "Control id must not be empty".to_string(),
            }
            .into());
        }

        // Security: Prevent path injection into the endpoint URL. A lone `.`
        // survives encoding and is collapsed as a dot segment.
        if control_id.contains('/')
            || control_id.contains('\\')
            || control_id.contains("..")
            || control_id.chars().all(|c| c == '.')
        {
            return Err(DashboardError::Validation {
                message: format!(
                    "Control id '{}' contains path separators which are not allowed",
                    control_id
                ),
            }
            .into());
        }

        if control_id.contains('#') || control_id.contains('?') || control_id.contains('@') {
            return Err(DashboardError::Validation {
                message: format!("Control id '{}' contains URL-unsafe characters", control_id),
            }
            .into());
        }

        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Sends a prepared request and decodes a JSON body
    async fn send<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| DashboardError::request_failed(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::request_failed(
                operation,
                format!("API returned status code {}", status),
            )
            .into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DashboardError::request_failed(operation, e))?;

        serde_json::from_slice(&body).map_err(|e| {
            DashboardError::request_failed(
                operation,
                format!("Failed to decode response body: {}", e),
            )
            .into()
        })
    }

    async fn get<T: DeserializeOwned>(&self, operation: &str, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!("GET {}", url);
        self.send(operation, self.client.get(&url)).await
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardClient {
    async fn fetch_overview(&self) -> Result<OverviewData> {
        self.get("fetch overview", "overview").await
    }

    async fn fetch_compliance_controls(&self) -> Result<Vec<Control>> {
        self.get("fetch controls", "compliance/controls").await
    }

    async fn analyze_control(&self, control_id: &str) -> Result<AnalysisResult> {
        Self::validate_control_id(control_id)?;

        let url = self.endpoint(&format!(
            "compliance/controls/{}/analysis",
            urlencoding::encode(control_id)
        ));
        debug!("POST {}", url);

        let operation = format!("analyze control {}", control_id);
        self.send(&operation, self.client.post(&url)).await
    }

    async fn fetch_sustainability_metrics(&self) -> Result<SustainabilityMetrics> {
        self.get("fetch sustainability metrics", "sustainability/metrics")
            .await
    }

    async fn run_simulation(&self, request: &SimulationRequest) -> Result<SimulationResult> {
        let url = self.endpoint("simulations/run");
        debug!(
            "POST {} ({} at {}%)",
            url, request.simulation_type, request.workload_percent
        );
        self.send("run simulation", self.client.post(&url).json(request))
            .await
    }
}
