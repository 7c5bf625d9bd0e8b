use crate::infra::AppState;
use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use glowpath::assessment::{
    build_insights, compute_assessment, AssessmentInput, AssessmentResult, ChartSeries,
    ReportGenerator, ReportInsights, SystemClock,
};
use glowpath::error::AppError;
use serde::Serialize;
use serde_json::json;
use tracing::warn;

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) result: AssessmentResult,
    pub(crate) insights: ReportInsights,
    pub(crate) charts: ChartSeries,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/assessment", post(assessment_endpoint))
        .route("/api/v1/assessment/report", post(report_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Parses a request body, reporting malformed JSON as a payload error.
fn parse_input(body: &[u8]) -> Result<AssessmentInput, AppError> {
    serde_json::from_slice(body).map_err(|err| {
        warn!(error = %err, "rejected malformed assessment payload");
        AppError::from(err)
    })
}

fn score(input: &AssessmentInput) -> Result<AssessmentResult, AppError> {
    compute_assessment(input).map_err(|err| {
        warn!(error = %err, "rejected assessment input");
        AppError::from(err)
    })
}

pub(crate) async fn assessment_endpoint(body: Bytes) -> Result<Json<AssessmentResponse>, AppError> {
    let input = parse_input(&body)?;
    let result = score(&input)?;
    let insights = build_insights(&result);
    let charts = ChartSeries::from_result(&result);

    Ok(Json(AssessmentResponse {
        result,
        insights,
        charts,
    }))
}

pub(crate) async fn report_endpoint(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let input = parse_input(&body)?;
    let result = score(&input)?;
    let report = ReportGenerator::with_config(SystemClock, &state.report).render(&result);

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        report,
    ))
}
