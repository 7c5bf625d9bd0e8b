use glowpath::assessment::{Answers, AssessmentInput, StudentInfo, QUESTION_COUNT};
use glowpath::config::ReportConfig;
use glowpath::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) report: Arc<ReportConfig>,
}

/// Reads and parses an assessment input file.
pub(crate) fn load_input(path: &Path) -> Result<AssessmentInput, AppError> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        warn!(path = %path.display(), error = %err, "rejected assessment input file");
        AppError::from(err)
    })
}

/// Template handed to people filling in the questionnaire by hand.
pub(crate) fn sample_input() -> AssessmentInput {
    AssessmentInput {
        student: StudentInfo {
            name: "张同学".to_string(),
            grade: "高一".to_string(),
            track: "普高".to_string(),
            target: "香港本科".to_string(),
        },
        answers: (1..=QUESTION_COUNT)
            .map(|question| (question, 3))
            .collect::<Answers>(),
    }
}
