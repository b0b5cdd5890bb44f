//! # Server Configuration
//!
//! This module contains the server setup and router configuration for the
//! Workforce Admin service.

use std::sync::Arc;

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::handlers::{self, workers, workplaces};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseConnection,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route(
            "/api/v1/workplaces",
            get(workplaces::list_workplaces).post(workplaces::create_workplace),
        )
        .route(
            "/api/v1/workplaces/{id}",
            get(workplaces::get_workplace)
                .put(workplaces::update_workplace)
                .delete(workplaces::delete_workplace),
        )
        .route(
            "/api/v1/workers",
            get(workers::list_workers).post(workers::create_worker),
        )
        .route(
            "/api/v1/workers/{id}",
            get(workers::get_worker)
                .put(workers::update_worker)
                .delete(workers::delete_worker),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

/// Starts the server with the given configuration and database pool
pub async fn run_server(
    config: AppConfig,
    db: DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    // Resolve the configured bind address before moving the config into state
    let addr = config
        .bind_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;
    let profile = config.profile.clone();

    let state = AppState {
        config: Arc::new(config),
        db,
    };
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, %profile, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds an [`AppState`] for tests without going through `run_server`
pub fn create_test_app_state(config: AppConfig, db: DatabaseConnection) -> AppState {
    AppState {
        config: Arc::new(config),
        db,
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz,
        crate::handlers::workplaces::list_workplaces,
        crate::handlers::workplaces::get_workplace,
        crate::handlers::workplaces::create_workplace,
        crate::handlers::workplaces::update_workplace,
        crate::handlers::workplaces::delete_workplace,
        crate::handlers::workers::list_workers,
        crate::handlers::workers::get_worker,
        crate::handlers::workers::create_worker,
        crate::handlers::workers::update_worker,
        crate::handlers::workers::delete_worker,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::handlers::HealthStatus,
            crate::error::ApiError,
            crate::handlers::workplaces::WorkplaceDto,
            crate::handlers::workplaces::CreateWorkplaceRequestDto,
            crate::handlers::workplaces::UpdateWorkplaceRequestDto,
            crate::handlers::workplaces::WorkplacesResponse,
            crate::handlers::workers::WorkerDto,
            crate::handlers::workers::CreateWorkerRequestDto,
            crate::handlers::workers::UpdateWorkerRequestDto,
            crate::handlers::workers::WorkersResponse,
        )
    ),
    info(
        title = "Workforce Admin API",
        description = "API for managing workplaces and the workers assigned to them",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
