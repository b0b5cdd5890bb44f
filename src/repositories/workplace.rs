//! # Workplace Repository
//!
//! This module contains the repository implementation for Workplace entities.
//! It owns the one non-trivial rule of the domain: a workplace that still has
//! workers assigned cannot be deleted.

use std::collections::HashMap;

use crate::error::RepositoryError;
use crate::models::worker;
use crate::models::workplace::{
    ActiveModel as WorkplaceActiveModel, Entity as Workplace, Model as WorkplaceModel,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    PaginatorTrait, QueryFilter, QuerySelect, Set,
};

/// Request data for creating a new workplace
#[derive(Debug, Clone)]
pub struct CreateWorkplaceRequest {
    /// Display name of the workplace
    pub name: String,
    /// City the workplace is located in
    pub city: String,
}

/// Repository for Workplace database operations
pub struct WorkplaceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkplaceRepository<'a> {
    /// Create a new WorkplaceRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a new workplace
    pub async fn create_workplace(
        &self,
        request: CreateWorkplaceRequest,
    ) -> Result<WorkplaceModel, RepositoryError> {
        validate_required("name", &request.name)?;
        validate_required("city", &request.city)?;

        let workplace = WorkplaceActiveModel {
            name: Set(request.name),
            city: Set(request.city),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let result = workplace
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// Get workplace by ID
    pub async fn get_workplace(
        &self,
        workplace_id: i32,
    ) -> Result<Option<WorkplaceModel>, RepositoryError> {
        let workplace = Workplace::find_by_id(workplace_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(workplace)
    }

    /// Get workplace by ID together with its derived worker count
    pub async fn get_workplace_with_count(
        &self,
        workplace_id: i32,
    ) -> Result<Option<(WorkplaceModel, i64)>, RepositoryError> {
        let Some(workplace) = self.get_workplace(workplace_id).await? else {
            return Ok(None);
        };

        let count = self.worker_count(workplace_id).await?;
        Ok(Some((workplace, count as i64)))
    }

    /// List all workplaces, each paired with its worker count.
    ///
    /// The counts come from a single grouped query rather than one count per
    /// row; workplaces without workers fall back to zero.
    pub async fn list_workplaces(
        &self,
    ) -> Result<Vec<(WorkplaceModel, i64)>, RepositoryError> {
        let workplaces = Workplace::find()
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        let counts: Vec<(i32, i64)> = worker::Entity::find()
            .select_only()
            .column(worker::Column::WorkplaceId)
            .column_as(worker::Column::Id.count(), "workers_quantity")
            .group_by(worker::Column::WorkplaceId)
            .into_tuple()
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        let counts_by_id: HashMap<i32, i64> = counts.into_iter().collect();

        Ok(workplaces
            .into_iter()
            .map(|workplace| {
                let count = counts_by_id.get(&workplace.id).copied().unwrap_or(0);
                (workplace, count)
            })
            .collect())
    }

    /// Overwrite the name and city of an existing workplace
    pub async fn update_workplace(
        &self,
        workplace_id: i32,
        name: String,
        city: String,
    ) -> Result<WorkplaceModel, RepositoryError> {
        validate_required("name", &name)?;
        validate_required("city", &city)?;

        let workplace = self
            .get_workplace(workplace_id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Workplace not found".to_string()))?;

        let mut active_workplace = workplace.into_active_model();
        active_workplace.name = Set(name);
        active_workplace.city = Set(city);

        let result = active_workplace
            .update(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// Delete a workplace.
    ///
    /// Fails with [`RepositoryError::HasDependents`] while any worker still
    /// references the workplace; the deletion guard is asymmetric by design
    /// (workers delete freely, workplaces do not cascade).
    pub async fn delete_workplace(&self, workplace_id: i32) -> Result<(), RepositoryError> {
        let workplace = Workplace::find_by_id(workplace_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(|| RepositoryError::NotFound("Workplace not found".to_string()))?;

        let worker_count = self.worker_count(workplace_id).await?;
        if worker_count > 0 {
            return Err(RepositoryError::HasDependents {
                workplace_id,
                worker_count,
            });
        }

        workplace
            .delete(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }

    /// Check if a workplace exists
    pub async fn workplace_exists(&self, workplace_id: i32) -> Result<bool, RepositoryError> {
        let exists = Workplace::find_by_id(workplace_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .is_some();

        Ok(exists)
    }

    /// Count the workers currently assigned to a workplace
    pub async fn worker_count(&self, workplace_id: i32) -> Result<u64, RepositoryError> {
        let count = worker::Entity::find()
            .filter(worker::Column::WorkplaceId.eq(workplace_id))
            .count(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(count)
    }
}

/// Validate that a required text field is present and within bounds
pub(crate) fn validate_required(field: &str, value: &str) -> Result<(), RepositoryError> {
    if value.trim().is_empty() {
        return Err(RepositoryError::validation_error(format!(
            "{field} cannot be empty"
        )));
    }

    if value.len() > 255 {
        return Err(RepositoryError::validation_error(format!(
            "{field} cannot exceed 255 characters"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::worker::{CreateWorkerRequest, WorkerRepository};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectionTrait, Database, Statement};

    async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory SQLite");

        Migrator::up(&db, None).await.expect("migrations apply");

        // SQLite only enforces foreign keys when asked to
        db.execute(Statement::from_string(
            db.get_database_backend(),
            "PRAGMA foreign_keys = ON".to_string(),
        ))
        .await
        .expect("enable foreign keys");

        db
    }

    fn acme() -> CreateWorkplaceRequest {
        CreateWorkplaceRequest {
            name: "Acme".to_string(),
            city: "Springfield".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_workplace_success() {
        let db = setup_test_db().await;
        let repo = WorkplaceRepository::new(&db);

        let workplace = repo.create_workplace(acme()).await.unwrap();

        assert!(workplace.id >= 1);
        assert_eq!(workplace.name, "Acme");
        assert_eq!(workplace.city, "Springfield");
        assert!(workplace.created_at.timestamp() > 0);
    }

    #[tokio::test]
    async fn test_create_workplace_validation() {
        let db = setup_test_db().await;
        let repo = WorkplaceRepository::new(&db);

        let result = repo
            .create_workplace(CreateWorkplaceRequest {
                name: "".to_string(),
                city: "Springfield".to_string(),
            })
            .await;
        assert!(matches!(result, Err(RepositoryError::Validation(_))));

        let result = repo
            .create_workplace(CreateWorkplaceRequest {
                name: "Acme".to_string(),
                city: "   ".to_string(),
            })
            .await;
        assert!(matches!(result, Err(RepositoryError::Validation(_))));

        let result = repo
            .create_workplace(CreateWorkplaceRequest {
                name: "a".repeat(256),
                city: "Springfield".to_string(),
            })
            .await;
        assert!(matches!(result, Err(RepositoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_workplace_round_trip() {
        let db = setup_test_db().await;
        let repo = WorkplaceRepository::new(&db);

        let created = repo.create_workplace(acme()).await.unwrap();
        let found = repo.get_workplace(created.id).await.unwrap().unwrap();

        assert_eq!(found, created);

        let missing = repo.get_workplace(created.id + 1000).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_workplace_overwrites_fields() {
        let db = setup_test_db().await;
        let repo = WorkplaceRepository::new(&db);

        let created = repo.create_workplace(acme()).await.unwrap();
        let updated = repo
            .update_workplace(created.id, "Acme East".to_string(), "Shelbyville".to_string())
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Acme East");
        assert_eq!(updated.city, "Shelbyville");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_workplace_is_idempotent() {
        let db = setup_test_db().await;
        let repo = WorkplaceRepository::new(&db);

        let created = repo.create_workplace(acme()).await.unwrap();
        let updated = repo
            .update_workplace(created.id, created.name.clone(), created.city.clone())
            .await
            .unwrap();

        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_update_missing_workplace_returns_not_found() {
        let db = setup_test_db().await;
        let repo = WorkplaceRepository::new(&db);

        let result = repo
            .update_workplace(404, "Acme".to_string(), "Springfield".to_string())
            .await;

        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_workplace_without_workers() {
        let db = setup_test_db().await;
        let repo = WorkplaceRepository::new(&db);

        let created = repo.create_workplace(acme()).await.unwrap();
        repo.delete_workplace(created.id).await.unwrap();

        assert!(repo.get_workplace(created.id).await.unwrap().is_none());
        assert!(repo.list_workplaces().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_workplace_with_workers_is_blocked() {
        let db = setup_test_db().await;
        let repo = WorkplaceRepository::new(&db);
        let worker_repo = WorkerRepository::new(&db);

        let workplace = repo.create_workplace(acme()).await.unwrap();
        let worker = worker_repo
            .create_worker(CreateWorkerRequest {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                position: "Engineer".to_string(),
                workplace_id: workplace.id,
            })
            .await
            .unwrap();

        let result = repo.delete_workplace(workplace.id).await;
        assert!(matches!(
            result,
            Err(RepositoryError::HasDependents {
                worker_count: 1,
                ..
            })
        ));

        // Both sides of the relationship are untouched by the failed delete
        assert!(repo.get_workplace(workplace.id).await.unwrap().is_some());
        assert!(
            worker_repo
                .get_worker(worker.id)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_delete_missing_workplace_returns_not_found() {
        let db = setup_test_db().await;
        let repo = WorkplaceRepository::new(&db);

        let result = repo.delete_workplace(404).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_worker_counts_track_inserts_and_deletes() {
        let db = setup_test_db().await;
        let repo = WorkplaceRepository::new(&db);
        let worker_repo = WorkerRepository::new(&db);

        let staffed = repo.create_workplace(acme()).await.unwrap();
        let empty = repo
            .create_workplace(CreateWorkplaceRequest {
                name: "Globex".to_string(),
                city: "Cypress Creek".to_string(),
            })
            .await
            .unwrap();

        let first = worker_repo
            .create_worker(CreateWorkerRequest {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                position: "Engineer".to_string(),
                workplace_id: staffed.id,
            })
            .await
            .unwrap();
        worker_repo
            .create_worker(CreateWorkerRequest {
                first_name: "John".to_string(),
                last_name: "Smith".to_string(),
                position: "Technician".to_string(),
                workplace_id: staffed.id,
            })
            .await
            .unwrap();

        let listed = repo.list_workplaces().await.unwrap();
        let count_of = |id: i32| {
            listed
                .iter()
                .find(|(w, _)| w.id == id)
                .map(|(_, count)| *count)
                .unwrap()
        };
        assert_eq!(count_of(staffed.id), 2);
        assert_eq!(count_of(empty.id), 0);

        worker_repo.delete_worker(first.id).await.unwrap();
        assert_eq!(repo.worker_count(staffed.id).await.unwrap(), 1);
    }
}
