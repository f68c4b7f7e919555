use crate::application::read_models::{
    ComplianceView, DashboardView, SimulationReport, SummaryView,
};
use crate::dashboard::domain::{
    AnalysisResult, ControlStatus, OverviewData, SustainabilityMetrics,
};
use crate::dashboard::state::ViewState;
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Markdown table header for the control list
const CONTROL_TABLE_HEADER: &str = "| ID | Name | Framework | Severity | Status | Evidence |\n";

/// Markdown table separator line for the control list
const CONTROL_TABLE_SEPARATOR: &str = "|----|------|-----------|----------|--------|----------|\n";

/// Markdown table header for idle resources
const IDLE_TABLE_HEADER: &str =
    "| Name | Type | Region | Instance Type | Avg CPU (7d) | Daily Cost |\n";

/// Markdown table separator line for idle resources
const IDLE_TABLE_SEPARATOR: &str =
    "|------|------|--------|---------------|--------------|------------|\n";

/// Placeholder shown wherever a list came back empty
const NO_DATA: &str = "*No data*\n\n";

/// MarkdownFormatter adapter for human-readable dashboard pages
///
/// This adapter implements the ViewFormatter port. Each page maps to a
/// section tree of headings and tables; the summary page nests the
/// overview and sustainability pages one heading level down.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn heading(output: &mut String, level: usize, text: &str) {
        output.push_str(&"#".repeat(level.clamp(1, 6)));
        output.push(' ');
        output.push_str(text);
        output.push_str("\n\n");
    }

    /// Whole numbers print without decimals, everything else with one
    fn number(value: f64) -> String {
        if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            format!("{:.1}", value)
        }
    }

    /// Renders an API timestamp for display, leaving unrecognized text as-is
    fn display_timestamp(raw: &str) -> String {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.format("%Y-%m-%d %H:%M UTC%:z").to_string();
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return date.format("%Y-%m-%d").to_string();
        }
        Self::escape_markdown_table_cell(raw)
    }

    fn status_label(status: ControlStatus) -> &'static str {
        match status {
            ControlStatus::Pass => "✅ Pass",
            ControlStatus::Fail => "❌ Fail",
            ControlStatus::AtRisk => "⚠️ At Risk",
        }
    }

    fn render_failure(output: &mut String, reason: &str) {
        output.push_str("> ⚠️ Failed to load data\n>\n");
        output.push_str(&format!("> {}\n\n", reason.replace('\n', "\n> ")));
    }

    /// Renders a nested slot: data via `render`, anything else as a placeholder
    fn render_slot<T>(
        output: &mut String,
        level: usize,
        title: &str,
        state: &ViewState<T>,
        render: impl FnOnce(&mut String, usize, &T),
    ) {
        match state {
            ViewState::Success(data) => render(output, level, data),
            ViewState::Error(reason) => {
                Self::heading(output, level, title);
                Self::render_failure(output, reason);
            }
            ViewState::Loading => {
                Self::heading(output, level, title);
                output.push_str("*Loading...*\n\n");
            }
            ViewState::Idle => {}
        }
    }
}

/// Page renderers
impl MarkdownFormatter {
    fn render_overview(output: &mut String, level: usize, data: &OverviewData) {
        Self::heading(output, level, "Overview");
        output.push_str("Real-time compliance and sustainability metrics.\n\n");
        output.push_str("| Metric | Value |\n|--------|-------|\n");
        output.push_str(&format!(
            "| Compliance Score | {}% |\n",
            Self::number(data.compliance_score)
        ));
        output.push_str(&format!(
            "| Sustainability Score | {}% |\n",
            Self::number(data.sustainability_score)
        ));
        output.push_str(&format!("| Open Risks | {} |\n\n", data.open_risks));

        Self::heading(output, level + 1, "Compliance Trend");
        if data.compliance_trend.is_empty() {
            output.push_str(NO_DATA);
        } else {
            output.push_str("| Timestamp | Score |\n|-----------|-------|\n");
            for point in &data.compliance_trend {
                output.push_str(&format!(
                    "| {} | {}% |\n",
                    Self::display_timestamp(&point.timestamp),
                    Self::number(point.score)
                ));
            }
            output.push('\n');
        }

        Self::heading(output, level + 1, "Emissions Trend");
        if data.emissions_trend.is_empty() {
            output.push_str(NO_DATA);
        } else {
            output.push_str(
                "| Timestamp | Emissions (kg CO2e) |\n|-----------|---------------------|\n",
            );
            for point in &data.emissions_trend {
                output.push_str(&format!(
                    "| {} | {} |\n",
                    Self::display_timestamp(&point.timestamp),
                    Self::number(point.emissions_kg)
                ));
            }
            output.push('\n');
        }

        Self::heading(output, level + 1, "Top Issues");
        if data.top_issues.is_empty() {
            output.push_str("*No open issues*\n\n");
        } else {
            output.push_str("| Type | Severity | Status | Description | Last Updated |\n");
            output.push_str("|------|----------|--------|-------------|--------------|\n");
            for issue in &data.top_issues {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    issue.kind,
                    issue.severity,
                    Self::escape_markdown_table_cell(&issue.status),
                    Self::escape_markdown_table_cell(&issue.description),
                    Self::display_timestamp(&issue.last_updated)
                ));
            }
            output.push('\n');
        }
    }

    fn render_compliance(output: &mut String, level: usize, view: &ComplianceView) {
        Self::heading(output, level, "Compliance Center");
        output.push_str(&format!(
            "Overall weighted score: **{}%** across {} {}.\n\n",
            Self::number(view.overall_score),
            view.controls.len(),
            if view.controls.len() == 1 {
                "control"
            } else {
                "controls"
            }
        ));

        Self::heading(output, level + 1, "Frameworks");
        if view.framework_scores.is_empty() {
            output.push_str(NO_DATA);
        } else {
            output.push_str("| Framework | Score | Passing | Controls |\n");
            output.push_str("|-----------|-------|---------|----------|\n");
            for framework in &view.framework_scores {
                output.push_str(&format!(
                    "| {} | {}% | {} | {} |\n",
                    Self::escape_markdown_table_cell(&framework.framework),
                    Self::number(framework.score),
                    framework.passing_count,
                    framework.control_count
                ));
            }
            output.push('\n');
        }

        Self::heading(output, level + 1, "Open Risks");
        let risks = &view.open_risks;
        output.push_str("| Critical | High | Medium | Low | Total |\n");
        output.push_str("|----------|------|--------|-----|-------|\n");
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n\n",
            risks.critical,
            risks.high,
            risks.medium,
            risks.low,
            risks.total()
        ));

        Self::heading(output, level + 1, "Active Controls");
        if view.controls.is_empty() {
            output.push_str(NO_DATA);
            return;
        }
        output.push_str(CONTROL_TABLE_HEADER);
        output.push_str(CONTROL_TABLE_SEPARATOR);
        for control in &view.controls {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&control.id),
                Self::escape_markdown_table_cell(&control.name),
                Self::escape_markdown_table_cell(&control.framework),
                control.severity,
                Self::status_label(control.status),
                control.evidence_count
            ));
        }
        output.push('\n');
    }

    fn render_analysis(output: &mut String, level: usize, result: &AnalysisResult) {
        Self::heading(
            output,
            level,
            &format!("Control Analysis: {}", result.control_id),
        );
        output.push_str("| Field | Value |\n|-------|-------|\n");
        output.push_str(&format!(
            "| Status | {} |\n",
            Self::escape_markdown_table_cell(&result.status)
        ));
        output.push_str(&format!(
            "| Confidence | {}% |\n\n",
            result.confidence_percent()
        ));

        Self::heading(output, level + 1, "Implementation Statement");
        output.push_str(result.implementation_statement.trim());
        output.push_str("\n\n");
    }

    fn render_sustainability(output: &mut String, level: usize, metrics: &SustainabilityMetrics) {
        Self::heading(output, level, "Sustainability");
        if !metrics.ai_insight.trim().is_empty() {
            output.push_str(&format!(
                "> 💡 **AI Insight:** {}\n\n",
                metrics.ai_insight.trim().replace('\n', "\n> ")
            ));
        }

        output.push_str("| Metric | Value |\n|--------|-------|\n");
        output.push_str(&format!(
            "| Total Monthly Emissions | {:.0} kg CO2e |\n",
            metrics.total_monthly_emissions_kg
        ));
        output.push_str(&format!(
            "| Potential Cost Savings | ${:.0}/mo |\n",
            metrics.potential_monthly_cost_savings_usd
        ));
        output.push_str(&format!(
            "| Potential Emissions Savings | {:.0} kg CO2e/mo |\n",
            metrics.potential_monthly_emissions_savings_kg
        ));
        output.push_str(&format!(
            "| Sustainability Score | {}% |\n",
            Self::number(metrics.sustainability_score)
        ));
        output.push_str(&format!(
            "| Idle Resources | {} |\n\n",
            metrics.idle_resources.len()
        ));

        Self::heading(output, level + 1, "Emissions by Region");
        if metrics.emissions_by_region.is_empty() {
            output.push_str(NO_DATA);
        } else {
            output.push_str("| Region | Emissions (kg CO2e) |\n|--------|---------------------|\n");
            for region in &metrics.emissions_by_region {
                output.push_str(&format!(
                    "| {} | {} |\n",
                    Self::escape_markdown_table_cell(&region.region),
                    Self::number(region.emissions_kg)
                ));
            }
            output.push('\n');
        }

        Self::heading(output, level + 1, "Idle Resources");
        if metrics.idle_resources.is_empty() {
            output.push_str("*No idle resources detected*\n\n");
            return;
        }
        output.push_str(IDLE_TABLE_HEADER);
        output.push_str(IDLE_TABLE_SEPARATOR);
        for resource in &metrics.idle_resources {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {:.0}% | ${:.2} |\n",
                Self::escape_markdown_table_cell(&resource.name),
                Self::escape_markdown_table_cell(&resource.resource_type),
                Self::escape_markdown_table_cell(&resource.region),
                Self::escape_markdown_table_cell(&resource.instance_type),
                resource.avg_cpu_7d * 100.0,
                resource.daily_cost_usd
            ));
        }
        output.push('\n');
    }

    fn render_simulation(output: &mut String, level: usize, report: &SimulationReport) {
        let request = &report.request;
        let result = &report.result;

        Self::heading(output, level, "Scenario Simulation");
        Self::heading(output, level + 1, "Scenario");
        output.push_str("| Setting | Value |\n|---------|-------|\n");
        output.push_str(&format!(
            "| Simulation Type | {} |\n",
            request.simulation_type.label()
        ));
        output.push_str(&format!("| Scope | {}% |\n", request.workload_percent));
        if let Some(source) = &request.source_region {
            output.push_str(&format!(
                "| Source Region | {} |\n",
                Self::escape_markdown_table_cell(source)
            ));
        }
        if let Some(target) = &request.target_region {
            output.push_str(&format!(
                "| Target Region | {} |\n",
                Self::escape_markdown_table_cell(target)
            ));
        }
        output.push('\n');

        Self::heading(output, level + 1, "Estimated Impact");
        output.push_str("| Estimate | Value |\n|----------|-------|\n");
        output.push_str(&format!(
            "| Emissions Reduction | {:.0} kg |\n",
            result.estimated_emissions_reduction_kg
        ));
        output.push_str(&format!(
            "| Cost Savings | ${:.0}/mo |\n\n",
            result.estimated_cost_savings_usd
        ));

        Self::heading(output, level + 1, "Impact Detail");
        output.push_str(result.detail_summary.trim());
        output.push_str("\n\n");

        Self::heading(output, level + 1, "Risk Summary");
        output.push_str(result.risk_summary.trim());
        output.push_str("\n\n");
    }

    fn render_summary(output: &mut String, level: usize, summary: &SummaryView) {
        Self::heading(output, level, "Dashboard Summary");
        Self::render_slot(
            output,
            level + 1,
            "Overview",
            &summary.overview,
            Self::render_overview,
        );
        Self::render_slot(
            output,
            level + 1,
            "Sustainability",
            &summary.sustainability,
            Self::render_sustainability,
        );
    }

    fn render_view(output: &mut String, view: &DashboardView) {
        match view {
            DashboardView::Overview(data) => Self::render_overview(output, 1, data),
            DashboardView::Compliance(view) => Self::render_compliance(output, 1, view),
            DashboardView::Analysis(result) => Self::render_analysis(output, 1, result),
            DashboardView::Sustainability(metrics) => {
                Self::render_sustainability(output, 1, metrics)
            }
            DashboardView::Simulation(report) => Self::render_simulation(output, 1, report),
            DashboardView::Summary(summary) => Self::render_summary(output, 1, summary),
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFormatter for MarkdownFormatter {
    fn format(&self, state: &ViewState<DashboardView>) -> Result<String> {
        let mut output = String::new();
        match state {
            ViewState::Success(view) => Self::render_view(&mut output, view),
            ViewState::Error(reason) => Self::render_failure(&mut output, reason),
            ViewState::Loading => output.push_str("*Loading...*\n"),
            ViewState::Idle => {}
        }
        Ok(output)
    }
}
