use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::application_dto::{
        ApplicationListQuery, ApplicationListResponse, ApplicationResponse,
        CreateApplicationPayload, DeleteResponse, StatusOptionsResponse, UpdateApplicationPayload,
    },
    error::{Error, Result},
    models::application::VALID_STATUSES,
    AppState,
};

const JSON_BODY_MESSAGE: &str = "Request body must be JSON";

/// A non-numeric id means the URL names no route we serve, so it gets the
/// same JSON 404 as any unknown endpoint rather than a parser error.
fn path_id(id: std::result::Result<Path<i64>, PathRejection>) -> Result<i64> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(_) => Err(Error::NotFound("Endpoint not found".to_string())),
    }
}

#[utoipa::path(
    get,
    path = "/api/applications",
    params(
        ("status" = Option<String>, Query, description = "Filter by exact status")
    ),
    responses(
        (status = 200, description = "List of job applications", body = Json<ApplicationListResponse>),
        (status = 400, description = "Invalid status filter")
    )
)]
#[axum::debug_handler]
pub async fn list_applications(
    State(state): State<AppState>,
    Query(query): Query<ApplicationListQuery>,
) -> Result<impl IntoResponse> {
    let result = state.application_service.list(query.status).await?;
    Ok(Json(ApplicationListResponse::from(result)))
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    params(
        ("id" = i64, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Application found", body = Json<ApplicationResponse>),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn get_application(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse> {
    let record = state.application_service.get_by_id(path_id(id)?).await?;
    Ok(Json(ApplicationResponse::from(record)))
}

#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = CreateApplicationPayload,
    responses(
        (status = 201, description = "Application created successfully", body = Json<ApplicationResponse>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_application(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateApplicationPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) =
        payload.map_err(|_| Error::MalformedRequest(JSON_BODY_MESSAGE.to_string()))?;
    let record = state.application_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ApplicationResponse::from(record))))
}

#[utoipa::path(
    put,
    path = "/api/applications/{id}",
    params(
        ("id" = i64, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationPayload,
    responses(
        (status = 200, description = "Application updated successfully", body = Json<ApplicationResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn update_application(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
    payload: std::result::Result<Json<UpdateApplicationPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let id = path_id(id)?;
    let Json(payload) =
        payload.map_err(|_| Error::MalformedRequest(JSON_BODY_MESSAGE.to_string()))?;
    let record = state.application_service.update(id, payload).await?;
    Ok(Json(ApplicationResponse::from(record)))
}

#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    params(
        ("id" = i64, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Application deleted successfully", body = Json<DeleteResponse>),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_application(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse> {
    state.application_service.delete(path_id(id)?).await?;
    Ok(Json(DeleteResponse {
        message: "Job application deleted successfully".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/status-options",
    responses(
        (status = 200, description = "Valid status values", body = Json<StatusOptionsResponse>)
    )
)]
#[axum::debug_handler]
pub async fn status_options() -> impl IntoResponse {
    Json(StatusOptionsResponse {
        statuses: VALID_STATUSES.iter().map(|s| s.to_string()).collect(),
    })
}

pub async fn endpoint_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Endpoint not found" })),
    )
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "Method not allowed" })),
    )
}
