use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{AnswerSubmission, AssessmentId, AssessmentRecord, ModuleId};
use super::leads::LeadSubmission;
use super::repository::{AssessmentRepository, LeadRepository};
use super::service::{AssessmentError, AssessmentService};

/// Opaque admin gate for the lead endpoints. The key is supplied via the
/// `X-Admin-Key` header or the `admin_key` query parameter; an unset key
/// disables the gate entirely.
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    key: Option<String>,
}

impl AdminGate {
    pub fn new(key: Option<String>) -> Self {
        Self { key }
    }

    fn authorize(&self, headers: &HeaderMap, query: &HashMap<String, String>) -> bool {
        let Some(expected) = &self.key else {
            return true;
        };
        let provided = headers
            .get("x-admin-key")
            .and_then(|value| value.to_str().ok())
            .or_else(|| query.get("admin_key").map(String::as_str));
        provided == Some(expected.as_str())
    }
}

pub(crate) struct RouterContext<R, L> {
    pub(crate) service: Arc<AssessmentService<R, L>>,
    pub(crate) admin: AdminGate,
}

/// Router builder exposing the checkup HTTP endpoints.
pub fn assessment_router<R, L>(
    service: Arc<AssessmentService<R, L>>,
    admin: AdminGate,
) -> Router
where
    R: AssessmentRepository + 'static,
    L: LeadRepository + 'static,
{
    let context = Arc::new(RouterContext { service, admin });
    Router::new()
        .route("/api/questions", get(all_questions_handler::<R, L>))
        .route(
            "/api/questions/:module",
            get(module_questions_handler::<R, L>),
        )
        .route("/api/assessments", post(create_handler::<R, L>))
        .route("/api/assessments/submit", post(submit_handler::<R, L>))
        .route("/api/assessments/:assessment_id", get(get_handler::<R, L>))
        .route("/api/leads", post(lead_handler::<R, L>))
        .route("/api/admin/leads", get(admin_leads_handler::<R, L>))
        .route(
            "/api/admin/leads/export",
            get(admin_export_handler::<R, L>),
        )
        .with_state(context)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateAssessmentRequest {
    pub(crate) modules: Vec<ModuleId>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitAssessmentRequest {
    pub(crate) assessment_id: AssessmentId,
    pub(crate) answers: Vec<AnswerSubmission>,
}

/// Submission response: the frozen result plus the session id, matching what
/// the results page renders.
#[derive(Debug, Serialize)]
pub(crate) struct SubmissionView {
    pub(crate) assessment_id: AssessmentId,
    #[serde(flatten)]
    pub(crate) result: super::domain::ScoreResult,
}

fn error_payload(status: StatusCode, error: &AssessmentError) -> Response {
    let body = axum::Json(json!({ "error": error.to_string() }));
    (status, body).into_response()
}

fn map_error(error: AssessmentError) -> Response {
    let status = match &error {
        AssessmentError::NotFound | AssessmentError::Catalog(_) => StatusCode::NOT_FOUND,
        AssessmentError::AlreadySubmitted => StatusCode::CONFLICT,
        AssessmentError::InvalidAnswer(_) | AssessmentError::Lead(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AssessmentError::Repository(_) | AssessmentError::Export(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_payload(status, &error)
}

pub(crate) async fn all_questions_handler<R, L>(
    State(context): State<Arc<RouterContext<R, L>>>,
) -> Response
where
    R: AssessmentRepository + 'static,
    L: LeadRepository + 'static,
{
    let modules = context.service.catalog().modules();
    (StatusCode::OK, axum::Json(json!({ "modules": modules }))).into_response()
}

pub(crate) async fn module_questions_handler<R, L>(
    State(context): State<Arc<RouterContext<R, L>>>,
    Path(module): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    L: LeadRepository + 'static,
{
    let id = ModuleId(module);
    match context.service.catalog().module(&id) {
        Ok(module) => (StatusCode::OK, axum::Json(json!({ "module": module }))).into_response(),
        Err(error) => map_error(AssessmentError::Catalog(error)),
    }
}

pub(crate) async fn create_handler<R, L>(
    State(context): State<Arc<RouterContext<R, L>>>,
    axum::Json(request): axum::Json<CreateAssessmentRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
    L: LeadRepository + 'static,
{
    match context.service.create(request.modules) {
        Ok(record) => (
            StatusCode::CREATED,
            axum::Json(json!({ "id": record.id, "modules": record.modules })),
        )
            .into_response(),
        Err(error) => map_error(error),
    }
}

pub(crate) async fn submit_handler<R, L>(
    State(context): State<Arc<RouterContext<R, L>>>,
    axum::Json(request): axum::Json<SubmitAssessmentRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
    L: LeadRepository + 'static,
{
    match context
        .service
        .submit(&request.assessment_id, &request.answers)
    {
        Ok(record) => submission_response(record),
        Err(error) => map_error(error),
    }
}

fn submission_response(record: AssessmentRecord) -> Response {
    // submit() never returns a record without a result; guard anyway so a
    // repository bug cannot panic the handler.
    match record.result {
        Some(result) => {
            let view = SubmissionView {
                assessment_id: record.id,
                result,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(json!({ "error": "assessment has no result" })),
        )
            .into_response(),
    }
}

pub(crate) async fn get_handler<R, L>(
    State(context): State<Arc<RouterContext<R, L>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    L: LeadRepository + 'static,
{
    let id = AssessmentId(assessment_id);
    match context.service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => map_error(error),
    }
}

pub(crate) async fn lead_handler<R, L>(
    State(context): State<Arc<RouterContext<R, L>>>,
    axum::Json(submission): axum::Json<LeadSubmission>,
) -> Response
where
    R: AssessmentRepository + 'static,
    L: LeadRepository + 'static,
{
    match context.service.capture_lead(submission) {
        Ok(record) => (
            StatusCode::CREATED,
            axum::Json(json!({ "success": true, "lead_id": record.id })),
        )
            .into_response(),
        Err(error) => map_error(error),
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        axum::Json(json!({ "error": "unauthorized" })),
    )
        .into_response()
}

pub(crate) async fn admin_leads_handler<R, L>(
    State(context): State<Arc<RouterContext<R, L>>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response
where
    R: AssessmentRepository + 'static,
    L: LeadRepository + 'static,
{
    if !context.admin.authorize(&headers, &query) {
        return unauthorized();
    }
    match context.service.leads() {
        Ok(leads) => (StatusCode::OK, axum::Json(json!({ "leads": leads }))).into_response(),
        Err(error) => map_error(error),
    }
}

pub(crate) async fn admin_export_handler<R, L>(
    State(context): State<Arc<RouterContext<R, L>>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response
where
    R: AssessmentRepository + 'static,
    L: LeadRepository + 'static,
{
    if !context.admin.authorize(&headers, &query) {
        return unauthorized();
    }
    match context.service.export_leads_csv() {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=riskcheck_leads.csv",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(error) => map_error(error),
    }
}
