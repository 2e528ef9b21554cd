use crate::infra::{deserialize_optional_date, AppState};
use crate::views::ResolutionView;
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use fleet_compliance::error::AppError;
use fleet_compliance::feed::ViolationFeedImporter;
use fleet_compliance::violations::report::RiskAssessment;
use fleet_compliance::violations::{
    Basic, ComplianceEngine, ComplianceSummary, DataQReport, RawViolationRecord,
    ViolationCodeEntry,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ClassifyRequest {
    #[serde(default)]
    pub(crate) violations: Option<Vec<RawViolationRecord>>,
    /// Raw inspection CSV export, used when `violations` is absent.
    #[serde(default)]
    pub(crate) violations_csv: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) as_of: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) include_dataq: bool,
    #[serde(default)]
    pub(crate) dataq_min_score: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ClassificationStatus {
    NoData,
    Classified,
}

#[derive(Debug, Serialize)]
pub(crate) struct ClassifyResponse {
    pub(crate) as_of: NaiveDate,
    pub(crate) status: ClassificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) summary: Option<ComplianceSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) risk: Option<RiskAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) dataq: Option<DataQReport>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CodeQuery {
    #[serde(default)]
    pub(crate) basic: Option<String>,
    #[serde(default)]
    pub(crate) oos_eligible: Option<bool>,
    #[serde(default)]
    pub(crate) moving: Option<bool>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CodeListResponse {
    pub(crate) total: usize,
    pub(crate) codes: Vec<ViolationCodeEntry>,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/violations/classify", post(classify_endpoint))
        .route("/api/v1/violation-codes", get(list_codes_endpoint))
        .route(
            "/api/v1/violation-codes/resolve/:code",
            get(resolve_code_endpoint),
        )
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
        json!({ "status": "ready", "reference_codes": state.reference.len() })
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

pub(crate) async fn classify_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let ClassifyRequest {
        violations,
        violations_csv,
        as_of,
        include_dataq,
        dataq_min_score,
    } = payload;

    let violations = match (violations, violations_csv) {
        (Some(records), _) => Some(records),
        (None, Some(csv)) => Some(ViolationFeedImporter::from_csv_reader(Cursor::new(
            csv.into_bytes(),
        ))?),
        (None, None) => None,
    };

    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let engine = ComplianceEngine::new(&state.reference);

    let Some(summary) = engine.classify(violations.as_deref(), as_of) else {
        return Ok(Json(ClassifyResponse {
            as_of,
            status: ClassificationStatus::NoData,
            summary: None,
            risk: None,
            dataq: None,
        }));
    };

    let risk = summary.risk_assessment();
    let dataq = include_dataq.then(|| {
        summary.dataq_opportunities(dataq_min_score.unwrap_or(state.dataq_min_score))
    });

    Ok(Json(ClassifyResponse {
        as_of,
        status: ClassificationStatus::Classified,
        summary: Some(summary),
        risk: Some(risk),
        dataq,
    }))
}

pub(crate) async fn list_codes_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<CodeQuery>,
) -> Result<Json<CodeListResponse>, (StatusCode, Json<serde_json::Value>)> {
    let basic = match query.basic.as_deref() {
        Some(raw) => Some(Basic::parse_hint(raw).ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("unknown BASIC '{raw}'") })),
            )
        })?),
        None => None,
    };

    let codes: Vec<ViolationCodeEntry> = state
        .reference
        .entries()
        .iter()
        .filter(|entry| basic.map_or(true, |basic| entry.basic == basic))
        .filter(|entry| query.oos_eligible.map_or(true, |flag| entry.oos_eligible == flag))
        .filter(|entry| query.moving.map_or(true, |flag| entry.is_moving == flag))
        .cloned()
        .collect();

    Ok(Json(CodeListResponse {
        total: codes.len(),
        codes,
    }))
}

pub(crate) async fn resolve_code_endpoint(
    Extension(state): Extension<AppState>,
    Path(code): Path<String>,
) -> Json<ResolutionView> {
    let engine = ComplianceEngine::new(&state.reference);
    let resolved = engine.resolve(&code);
    Json(ResolutionView::new(&code, &resolved))
}
