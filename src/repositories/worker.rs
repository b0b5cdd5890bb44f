//! # Worker Repository
//!
//! This module contains the repository implementation for Worker entities.
//! The workplace reference is checked against the workplace table before
//! every insert and update; worker deletion is unconditional.

use crate::error::RepositoryError;
use crate::models::worker::{
    ActiveModel as WorkerActiveModel, Entity as Worker, Model as WorkerModel,
};
use crate::models::workplace::Entity as Workplace;
use crate::repositories::workplace::validate_required;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait, Set,
};

/// Request data for creating or overwriting a worker
#[derive(Debug, Clone)]
pub struct CreateWorkerRequest {
    /// First name of the worker
    pub first_name: String,
    /// Last name of the worker
    pub last_name: String,
    /// Position or title held at the workplace
    pub position: String,
    /// Workplace this worker is assigned to
    pub workplace_id: i32,
}

/// Repository for Worker database operations
pub struct WorkerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkerRepository<'a> {
    /// Create a new WorkerRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a new worker
    pub async fn create_worker(
        &self,
        request: CreateWorkerRequest,
    ) -> Result<WorkerModel, RepositoryError> {
        self.validate_worker_fields(&request).await?;

        let worker = WorkerActiveModel {
            first_name: Set(request.first_name),
            last_name: Set(request.last_name),
            position: Set(request.position),
            workplace_id: Set(request.workplace_id),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let result = worker
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// Get worker by ID
    pub async fn get_worker(&self, worker_id: i32) -> Result<Option<WorkerModel>, RepositoryError> {
        let worker = Worker::find_by_id(worker_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(worker)
    }

    /// List all workers
    pub async fn list_workers(&self) -> Result<Vec<WorkerModel>, RepositoryError> {
        let workers = Worker::find()
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(workers)
    }

    /// Overwrite all fields of an existing worker
    pub async fn update_worker(
        &self,
        worker_id: i32,
        request: CreateWorkerRequest,
    ) -> Result<WorkerModel, RepositoryError> {
        self.validate_worker_fields(&request).await?;

        let worker = self
            .get_worker(worker_id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Worker not found".to_string()))?;

        let mut active_worker = worker.into_active_model();
        active_worker.first_name = Set(request.first_name);
        active_worker.last_name = Set(request.last_name);
        active_worker.position = Set(request.position);
        active_worker.workplace_id = Set(request.workplace_id);

        let result = active_worker
            .update(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// Delete a worker.
    ///
    /// Deleting an id that does not exist is a no-op; worker deletion carries
    /// no guard of its own.
    pub async fn delete_worker(&self, worker_id: i32) -> Result<(), RepositoryError> {
        let Some(worker) = self.get_worker(worker_id).await? else {
            return Ok(());
        };

        worker
            .delete(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }

    /// Validate worker fields, including that the workplace reference resolves
    async fn validate_worker_fields(
        &self,
        request: &CreateWorkerRequest,
    ) -> Result<(), RepositoryError> {
        validate_required("first_name", &request.first_name)?;
        validate_required("last_name", &request.last_name)?;
        validate_required("position", &request.position)?;

        let workplace_exists = Workplace::find_by_id(request.workplace_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .is_some();

        if !workplace_exists {
            return Err(RepositoryError::validation_error(format!(
                "workplace {} does not exist",
                request.workplace_id
            )));
        }

        Ok(())
    }
}
