//! # Workplaces API Handlers
//!
//! This module contains handlers for the workplace CRUD endpoints, including
//! the guarded delete: a workplace that still has workers answers 409.

use crate::error::ApiError;
use crate::models::workplace::Model as WorkplaceModel;
use crate::repositories::{CreateWorkplaceRequest, WorkplaceRepository};
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request payload for creating a new workplace
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateWorkplaceRequestDto {
    /// Display name of the workplace (required, max 255 characters)
    #[schema(example = "Acme Corp")]
    pub name: String,
    /// City the workplace is located in (required, max 255 characters)
    #[schema(example = "Springfield")]
    pub city: String,
}

/// Request payload for overwriting an existing workplace
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateWorkplaceRequestDto {
    /// New display name of the workplace
    #[schema(example = "Acme Corp")]
    pub name: String,
    /// New city of the workplace
    #[schema(example = "Shelbyville")]
    pub city: String,
}

/// Workplace representation returned by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WorkplaceDto {
    /// Unique identifier of the workplace
    #[schema(example = 1)]
    pub id: i32,
    /// Display name of the workplace
    #[schema(example = "Acme Corp")]
    pub name: String,
    /// City the workplace is located in
    #[schema(example = "Springfield")]
    pub city: String,
    /// Number of workers currently assigned to this workplace
    #[schema(example = 2)]
    pub workers_quantity: i64,
    /// Timestamp when the workplace was created (ISO 8601)
    #[schema(example = "2025-07-10T10:30:00Z")]
    pub created_at: String,
}

/// Response containing the list of workplaces
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WorkplacesResponse {
    /// All workplaces with their derived worker counts
    pub workplaces: Vec<WorkplaceDto>,
}

impl WorkplaceDto {
    fn from_model(workplace: WorkplaceModel, workers_quantity: i64) -> Self {
        Self {
            id: workplace.id,
            name: workplace.name,
            city: workplace.city,
            workers_quantity,
            created_at: workplace.created_at.to_rfc3339(),
        }
    }
}

fn validate_text_field(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        let mut api_err = ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED",
            &format!("{} is required and cannot be empty", field),
        );
        api_err.details = Some(Box::new(serde_json::json!({
            "field": field,
            "message": format!("{} must be provided and cannot be empty", field)
        })));
        return Err(api_err);
    }

    if value.len() > 255 {
        let mut api_err = ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED",
            &format!("{} exceeds maximum length", field),
        );
        api_err.details = Some(Box::new(serde_json::json!({
            "field": field,
            "max_length": 255,
            "actual_length": value.len()
        })));
        return Err(api_err);
    }

    Ok(())
}

/// List all workplaces with their worker counts
#[utoipa::path(
    get,
    path = "/api/v1/workplaces",
    responses(
        (status = 200, description = "All workplaces", body = WorkplacesResponse),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "workplaces"
)]
pub async fn list_workplaces(
    State(state): State<AppState>,
) -> Result<Json<WorkplacesResponse>, ApiError> {
    let repo = WorkplaceRepository::new(&state.db);
    let workplaces = repo.list_workplaces().await?;

    Ok(Json(WorkplacesResponse {
        workplaces: workplaces
            .into_iter()
            .map(|(workplace, count)| WorkplaceDto::from_model(workplace, count))
            .collect(),
    }))
}

/// Get a single workplace by ID
#[utoipa::path(
    get,
    path = "/api/v1/workplaces/{id}",
    params(
        ("id" = i32, Path, description = "Workplace ID")
    ),
    responses(
        (status = 200, description = "Workplace detail", body = WorkplaceDto),
        (status = 400, description = "Malformed workplace ID", body = ApiError),
        (status = 404, description = "Workplace not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "workplaces"
)]
pub async fn get_workplace(
    State(state): State<AppState>,
    Path(workplace_id): Path<i32>,
) -> Result<Json<WorkplaceDto>, ApiError> {
    let repo = WorkplaceRepository::new(&state.db);

    let (workplace, count) = repo
        .get_workplace_with_count(workplace_id)
        .await?
        .ok_or_else(|| workplace_not_found(workplace_id))?;

    Ok(Json(WorkplaceDto::from_model(workplace, count)))
}

/// Create a new workplace
#[utoipa::path(
    post,
    path = "/api/v1/workplaces",
    request_body = CreateWorkplaceRequestDto,
    responses(
        (status = 201, description = "Workplace created", body = WorkplaceDto, headers(
            ("Location", description = "URL of the created workplace")
        )),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "workplaces"
)]
pub async fn create_workplace(
    State(state): State<AppState>,
    Json(request): Json<CreateWorkplaceRequestDto>,
) -> Result<(StatusCode, [(&'static str, String); 1], Json<WorkplaceDto>), ApiError> {
    validate_text_field("name", &request.name)?;
    validate_text_field("city", &request.city)?;

    let repo = WorkplaceRepository::new(&state.db);
    let workplace = repo
        .create_workplace(CreateWorkplaceRequest {
            name: request.name.trim().to_string(),
            city: request.city.trim().to_string(),
        })
        .await?;

    let location_header = format!("/api/v1/workplaces/{}", workplace.id);

    Ok((
        StatusCode::CREATED,
        [("Location", location_header)],
        Json(WorkplaceDto::from_model(workplace, 0)),
    ))
}

/// Overwrite the name and city of an existing workplace
#[utoipa::path(
    put,
    path = "/api/v1/workplaces/{id}",
    params(
        ("id" = i32, Path, description = "Workplace ID")
    ),
    request_body = UpdateWorkplaceRequestDto,
    responses(
        (status = 200, description = "Workplace updated", body = WorkplaceDto),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 404, description = "Workplace not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "workplaces"
)]
pub async fn update_workplace(
    State(state): State<AppState>,
    Path(workplace_id): Path<i32>,
    Json(request): Json<UpdateWorkplaceRequestDto>,
) -> Result<Json<WorkplaceDto>, ApiError> {
    validate_text_field("name", &request.name)?;
    validate_text_field("city", &request.city)?;

    let repo = WorkplaceRepository::new(&state.db);
    let workplace = repo
        .update_workplace(
            workplace_id,
            request.name.trim().to_string(),
            request.city.trim().to_string(),
        )
        .await?;

    let count = repo.worker_count(workplace_id).await?;

    Ok(Json(WorkplaceDto::from_model(workplace, count as i64)))
}

/// Delete a workplace.
///
/// Refused with 409 while workers are still assigned; the records involved
/// are left untouched in that case.
#[utoipa::path(
    delete,
    path = "/api/v1/workplaces/{id}",
    params(
        ("id" = i32, Path, description = "Workplace ID")
    ),
    responses(
        (status = 204, description = "Workplace deleted"),
        (status = 404, description = "Workplace not found", body = ApiError),
        (status = 409, description = "Workplace still has workers", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "workplaces"
)]
pub async fn delete_workplace(
    State(state): State<AppState>,
    Path(workplace_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let repo = WorkplaceRepository::new(&state.db);
    repo.delete_workplace(workplace_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn workplace_not_found(workplace_id: i32) -> ApiError {
    let mut api_err = ApiError::new(
        StatusCode::NOT_FOUND,
        "WORKPLACE_NOT_FOUND",
        "Workplace not found",
    );
    api_err.details = Some(Box::new(serde_json::json!({
        "workplace_id": workplace_id
    })));
    api_err
}
