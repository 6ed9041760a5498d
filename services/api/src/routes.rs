use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use mindcheck::error::AppError;
use mindcheck::screening::presentation::chart_rng;
use mindcheck::screening::questionnaire::{CategorySection, OPTIONS_PER_QUESTION};
use mindcheck::screening::{AnswerSet, Assessment, Questionnaire, ResultsView, ScoringEngine};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    pub(crate) answers: AnswerSet,
    /// Reject invalid answers with 422 instead of scoring them as zero.
    #[serde(default)]
    pub(crate) strict: bool,
    /// Per-request chart seed, overriding the configured one.
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) assessed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) assessment: Assessment,
    pub(crate) results: ResultsView,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionnaireResponse {
    pub(crate) options_per_question: usize,
    pub(crate) sections: Vec<CategorySection>,
}

pub(crate) fn with_screening_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/questionnaire", get(questionnaire_endpoint))
        .route("/api/v1/assessments", post(assessment_endpoint))
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

pub(crate) async fn questionnaire_endpoint() -> Json<QuestionnaireResponse> {
    let questionnaire = Questionnaire::standard();
    Json(QuestionnaireResponse {
        options_per_question: OPTIONS_PER_QUESTION,
        sections: questionnaire.categories().to_vec(),
    })
}

pub(crate) async fn assessment_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let AssessmentRequest {
        answers,
        strict,
        seed,
    } = payload;

    let engine = ScoringEngine::standard();
    let assessment = if strict {
        Assessment::strict(&engine, &answers)?
    } else {
        Assessment::from_answers(&engine, &answers)
    };

    let mut rng = chart_rng(seed.or(state.presentation.chart_seed));
    let results = ResultsView::build(&assessment, &mut rng);

    Ok(Json(AssessmentResponse {
        assessed_at: Utc::now(),
        assessment,
        results,
    }))
}
