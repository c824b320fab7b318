use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, State},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use super::domain::{EmployeeId, EmployeeUpdate, NewComment};
use super::filters::EmployeeFilter;
use super::pipeline::{PipelineError, PipelineView, StatusSelection};
use super::repository::{EmployeeRepository, RepositoryError};
use super::service::{RecruitmentService, RecruitmentServiceError};

#[derive(Debug, Deserialize)]
pub struct AssignmentRequest {
    #[serde(default)]
    pub assignee: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    #[serde(default)]
    pub status: Option<StatusSelection>,
}

/// JSON body extractor whose rejections use the `{"error": ...}` body of every other failure.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(error_body(rejection.status(), rejection.body_text())),
        }
    }
}

/// Query string extractor with JSON rejections.
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(error_body(rejection.status(), rejection.body_text())),
        }
    }
}

/// Router builder exposing the store and pipeline commands to the presentation layer.
pub fn recruitment_router<R>(service: Arc<RecruitmentService<R>>) -> Router
where
    R: EmployeeRepository + 'static,
{
    Router::new()
        .route("/api/v1/employees", get(list_handler::<R>))
        .route(
            "/api/v1/employees/:employee_id",
            get(get_handler::<R>).patch(update_handler::<R>),
        )
        .route(
            "/api/v1/employees/:employee_id/comments",
            post(comment_handler::<R>),
        )
        .route(
            "/api/v1/employees/:employee_id/assignment",
            post(assignment_handler::<R>),
        )
        .route(
            "/api/v1/employees/:employee_id/status",
            post(status_handler::<R>),
        )
        .route(
            "/api/v1/employees/:employee_id/send-back",
            post(send_back_handler::<R>),
        )
        .route("/api/v1/views/:view", get(view_handler::<R>))
        .route("/api/v1/dashboard", get(dashboard_handler::<R>))
        .route("/api/v1/filters", get(filter_options_handler::<R>))
        .with_state(service)
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
    ApiQuery(filter): ApiQuery<EmployeeFilter>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.search(&filter) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
    Path(employee_id): Path<String>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.get(&EmployeeId(employee_id)) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
    Path(employee_id): Path<String>,
    ApiJson(update): ApiJson<EmployeeUpdate>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.update_employee(&EmployeeId(employee_id), update) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn comment_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
    Path(employee_id): Path<String>,
    ApiJson(comment): ApiJson<NewComment>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.add_comment(&EmployeeId(employee_id), comment) {
        Ok(comment) => (StatusCode::CREATED, Json(comment)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn assignment_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
    Path(employee_id): Path<String>,
    ApiJson(request): ApiJson<AssignmentRequest>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.assign_responsible(&EmployeeId(employee_id), request.assignee) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
    Path(employee_id): Path<String>,
    ApiJson(request): ApiJson<StatusRequest>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.update_status(&EmployeeId(employee_id), request.status) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn send_back_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
    Path(employee_id): Path<String>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.send_back_to_screening(&EmployeeId(employee_id)) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn view_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
    Path(view): Path<String>,
    ApiQuery(filter): ApiQuery<EmployeeFilter>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    let view = match view.parse::<PipelineView>() {
        Ok(view) => view,
        Err(error) => return error_body(StatusCode::NOT_FOUND, error.to_string()),
    };

    match service.list_view(view, &filter) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn dashboard_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.dashboard() {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn filter_options_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.filter_options() {
        Ok(options) => (StatusCode::OK, Json(options)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: RecruitmentServiceError) -> Response {
    let status = match &error {
        RecruitmentServiceError::Repository(RepositoryError::NotFound(_)) => StatusCode::NOT_FOUND,
        RecruitmentServiceError::Repository(RepositoryError::Conflict(_))
        | RecruitmentServiceError::Repository(RepositoryError::StaleStatus { .. })
        | RecruitmentServiceError::Pipeline(PipelineError::IllegalTransition { .. }) => {
            StatusCode::CONFLICT
        }
        RecruitmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        RecruitmentServiceError::Pipeline(_)
        | RecruitmentServiceError::EmptyComment
        | RecruitmentServiceError::EmptyUpdate
        | RecruitmentServiceError::UnknownAssignee(_)
        | RecruitmentServiceError::PipelineField(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };

    error_body(status, error.to_string())
}

fn error_body(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
