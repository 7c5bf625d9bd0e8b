mod clock;
mod insights;
mod narrative;
mod render;
mod templates;
pub mod views;

pub use clock::{Clock, FixedClock, SystemClock};
pub use templates::SECTION_HEADINGS;
pub use views::{BehaviorStyles, ChartData, ChartSeries, ReportInsights};

use crate::assessment::domain::AssessmentResult;
use crate::config::ReportConfig;
use tracing::debug;

/// Product name printed in the report footer unless configured otherwise.
pub const DEFAULT_TOOL_NAME: &str = "GlowPath 学生测评系统";

/// Derives the structured narrative (strengths, risks, styles, ...) for a
/// scored assessment. Pure and deterministic.
pub fn build_insights(result: &AssessmentResult) -> ReportInsights {
    insights::generate_insights(result)
}

/// Renders Markdown reports with an injected clock for the footer timestamp.
#[derive(Debug, Clone)]
pub struct ReportGenerator<C> {
    clock: C,
    tool_name: String,
}

impl<C: Clock> ReportGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            tool_name: DEFAULT_TOOL_NAME.to_string(),
        }
    }

    pub fn with_config(clock: C, config: &ReportConfig) -> Self {
        Self {
            clock,
            tool_name: config.tool_name.clone(),
        }
    }

    pub fn render(&self, result: &AssessmentResult) -> String {
        let insights = build_insights(result);
        self.render_with(result, &insights)
    }

    /// Renders from insights the caller already built.
    pub fn render_with(&self, result: &AssessmentResult, insights: &ReportInsights) -> String {
        let report = render::render_markdown(result, insights, self.clock.now(), &self.tool_name);
        debug!(
            student = %result.student.name,
            strengths = insights.strengths.len(),
            risks = insights.risks.len(),
            bytes = report.len(),
            "report rendered"
        );
        report
    }
}

/// Renders the Markdown report for a scored assessment.
pub fn generate_report(result: &AssessmentResult, clock: &impl Clock) -> String {
    ReportGenerator::new(clock).render(result)
}
