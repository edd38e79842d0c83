// SPDX-License-Identifier: MIT

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::blogflow::config::BlogflowConfig;
use crate::blogflow::error::{BlogflowError, Result};
use crate::blogflow::workflow::{UseCase, WorkflowFactory, WorkflowState};

#[derive(Clone)]
struct AppState {
    factory: Arc<WorkflowFactory>,
}

/// Build the API router around a workflow factory
pub fn router(factory: WorkflowFactory) -> Router {
    let state = AppState {
        factory: Arc::new(factory),
    };

    Router::new()
        .route("/api/health", get(health_check))
        .route("/blogs", post(create_blog))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(config: BlogflowConfig) -> Result<()> {
    let factory = WorkflowFactory::from_config(&config.model)?;
    let app = router(factory);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| BlogflowError::config(format!("Invalid listen address: {}", e)))?;
    log::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
struct BlogRequest {
    #[serde(default)]
    topic: String,
    language: Option<String>,
}

#[derive(Debug, Serialize)]
struct BlogResponse {
    run_id: Uuid,
    use_case: UseCase,
    generated_at: DateTime<Utc>,
    data: WorkflowState,
}

async fn create_blog(
    State(state): State<AppState>,
    Json(request): Json<BlogRequest>,
) -> Response {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "topic must not be empty"})),
        )
            .into_response();
    }

    let (use_case, initial) = match request.language {
        Some(language) => (
            UseCase::Language,
            WorkflowState::new(topic).with_language(language.to_lowercase()),
        ),
        None => (UseCase::Topic, WorkflowState::new(topic)),
    };

    let run_id = Uuid::new_v4();
    log::info!("Run {}: '{}' workflow for topic '{}'", run_id, use_case, topic);

    let result = match state.factory.setup(use_case) {
        Ok(workflow) => workflow.run(initial).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(data) => Json(BlogResponse {
            run_id,
            use_case,
            generated_at: Utc::now(),
            data,
        })
        .into_response(),
        Err(e) => {
            log::error!("Run {} failed: {}", run_id, e);
            error_response(run_id, &e).into_response()
        }
    }
}

fn error_status(err: &BlogflowError) -> StatusCode {
    match err {
        BlogflowError::MissingField { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        BlogflowError::Model(_) if err.is_transient() => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(run_id: Uuid, err: &BlogflowError) -> (StatusCode, Json<Value>) {
    (
        error_status(err),
        Json(json!({ "run_id": run_id, "error": err.to_string() })),
    )
}
