//! # Workers API Handlers
//!
//! This module contains handlers for the worker CRUD endpoints. The
//! workplace reference in create/update payloads must resolve to an existing
//! workplace; worker deletion is unconditional.

use crate::error::ApiError;
use crate::models::worker::Model as WorkerModel;
use crate::repositories::{CreateWorkerRequest, WorkerRepository};
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request payload for creating a new worker
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateWorkerRequestDto {
    /// First name of the worker (required)
    #[schema(example = "Jane")]
    pub first_name: String,
    /// Last name of the worker (required)
    #[schema(example = "Doe")]
    pub last_name: String,
    /// Position or title held at the workplace (required)
    #[schema(example = "Engineer")]
    pub position: String,
    /// Workplace the worker is assigned to (must exist)
    #[schema(example = 1)]
    pub workplace_id: i32,
}

/// Request payload for overwriting an existing worker
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateWorkerRequestDto {
    /// New first name of the worker
    #[schema(example = "Jane")]
    pub first_name: String,
    /// New last name of the worker
    #[schema(example = "Doe")]
    pub last_name: String,
    /// New position of the worker
    #[schema(example = "Staff Engineer")]
    pub position: String,
    /// Workplace the worker is assigned to (must exist)
    #[schema(example = 1)]
    pub workplace_id: i32,
}

/// Worker representation returned by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WorkerDto {
    /// Unique identifier of the worker
    #[schema(example = 1)]
    pub id: i32,
    /// First name of the worker
    #[schema(example = "Jane")]
    pub first_name: String,
    /// Last name of the worker
    #[schema(example = "Doe")]
    pub last_name: String,
    /// Position or title held at the workplace
    #[schema(example = "Engineer")]
    pub position: String,
    /// Workplace the worker is assigned to
    #[schema(example = 1)]
    pub workplace_id: i32,
    /// Timestamp when the worker was created (ISO 8601)
    #[schema(example = "2025-07-10T10:30:00Z")]
    pub created_at: String,
}

/// Response containing the list of workers
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WorkersResponse {
    /// All workers
    pub workers: Vec<WorkerDto>,
}

impl From<WorkerModel> for WorkerDto {
    fn from(worker: WorkerModel) -> Self {
        Self {
            id: worker.id,
            first_name: worker.first_name,
            last_name: worker.last_name,
            position: worker.position,
            workplace_id: worker.workplace_id,
            created_at: worker.created_at.to_rfc3339(),
        }
    }
}

/// List all workers
#[utoipa::path(
    get,
    path = "/api/v1/workers",
    responses(
        (status = 200, description = "All workers", body = WorkersResponse),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "workers"
)]
pub async fn list_workers(
    State(state): State<AppState>,
) -> Result<Json<WorkersResponse>, ApiError> {
    let repo = WorkerRepository::new(&state.db);
    let workers = repo.list_workers().await?;

    Ok(Json(WorkersResponse {
        workers: workers.into_iter().map(WorkerDto::from).collect(),
    }))
}

/// Get a single worker by ID
#[utoipa::path(
    get,
    path = "/api/v1/workers/{id}",
    params(
        ("id" = i32, Path, description = "Worker ID")
    ),
    responses(
        (status = 200, description = "Worker detail", body = WorkerDto),
        (status = 400, description = "Malformed worker ID", body = ApiError),
        (status = 404, description = "Worker not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "workers"
)]
pub async fn get_worker(
    State(state): State<AppState>,
    Path(worker_id): Path<i32>,
) -> Result<Json<WorkerDto>, ApiError> {
    let repo = WorkerRepository::new(&state.db);

    let worker = repo
        .get_worker(worker_id)
        .await?
        .ok_or_else(|| worker_not_found(worker_id))?;

    Ok(Json(WorkerDto::from(worker)))
}

/// Create a new worker
#[utoipa::path(
    post,
    path = "/api/v1/workers",
    request_body = CreateWorkerRequestDto,
    responses(
        (status = 201, description = "Worker created", body = WorkerDto, headers(
            ("Location", description = "URL of the created worker")
        )),
        (status = 400, description = "Validation failed (including an unknown workplace reference)", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "workers"
)]
pub async fn create_worker(
    State(state): State<AppState>,
    Json(request): Json<CreateWorkerRequestDto>,
) -> Result<(StatusCode, [(&'static str, String); 1], Json<WorkerDto>), ApiError> {
    let repo = WorkerRepository::new(&state.db);
    let worker = repo
        .create_worker(CreateWorkerRequest {
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            position: request.position.trim().to_string(),
            workplace_id: request.workplace_id,
        })
        .await?;

    let location_header = format!("/api/v1/workers/{}", worker.id);

    Ok((
        StatusCode::CREATED,
        [("Location", location_header)],
        Json(WorkerDto::from(worker)),
    ))
}

/// Overwrite all fields of an existing worker
#[utoipa::path(
    put,
    path = "/api/v1/workers/{id}",
    params(
        ("id" = i32, Path, description = "Worker ID")
    ),
    request_body = UpdateWorkerRequestDto,
    responses(
        (status = 200, description = "Worker updated", body = WorkerDto),
        (status = 400, description = "Validation failed (including an unknown workplace reference)", body = ApiError),
        (status = 404, description = "Worker not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "workers"
)]
pub async fn update_worker(
    State(state): State<AppState>,
    Path(worker_id): Path<i32>,
    Json(request): Json<UpdateWorkerRequestDto>,
) -> Result<Json<WorkerDto>, ApiError> {
    let repo = WorkerRepository::new(&state.db);
    let worker = repo
        .update_worker(
            worker_id,
            CreateWorkerRequest {
                first_name: request.first_name.trim().to_string(),
                last_name: request.last_name.trim().to_string(),
                position: request.position.trim().to_string(),
                workplace_id: request.workplace_id,
            },
        )
        .await?;

    Ok(Json(WorkerDto::from(worker)))
}

/// Delete a worker.
///
/// Always answers 204: deleting an id that no longer exists is a no-op.
#[utoipa::path(
    delete,
    path = "/api/v1/workers/{id}",
    params(
        ("id" = i32, Path, description = "Worker ID")
    ),
    responses(
        (status = 204, description = "Worker deleted (or already absent)"),
        (status = 400, description = "Malformed worker ID", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "workers"
)]
pub async fn delete_worker(
    State(state): State<AppState>,
    Path(worker_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let repo = WorkerRepository::new(&state.db);
    repo.delete_worker(worker_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn worker_not_found(worker_id: i32) -> ApiError {
    let mut api_err = ApiError::new(StatusCode::NOT_FOUND, "WORKER_NOT_FOUND", "Worker not found");
    api_err.details = Some(Box::new(serde_json::json!({
        "worker_id": worker_id
    })));
    api_err
}
