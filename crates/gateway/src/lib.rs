//! HTTP surface for the jobcrew agent.
//!
//! Exposes the registered crew to remote callers:
//!
//! - `GET /health`: liveness
//! - `GET /schema`: the advertised parameter schema
//! - `POST /kickoff`: run the crew with criteria overrides
//!
//! Built on Axum. The server runs until its shutdown channel fires.

pub mod facade;
pub mod registration;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use jobcrew_core::CriteriaUpdate;
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{info, warn};

pub use facade::JobSearchCrew;
pub use registration::{
    HttpRegistrar, ParameterSchema, ParameterSpec, RegistrationError, RegistrationOutcome,
    RegistrationRequest, Registrar,
};

type SharedCrew = Arc<JobSearchCrew>;

/// Build the Axum router with all gateway routes.
pub fn build_router(crew: SharedCrew) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/schema", get(schema_handler))
        .route("/kickoff", post(kickoff_handler))
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(crew)
}

/// Serve until `shutdown` fires or its sender is dropped.
pub async fn serve(
    listener: TcpListener,
    crew: SharedCrew,
    shutdown: oneshot::Receiver<()>,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "Gateway listening");

    axum::serve(listener, build_router(crew))
        .with_graceful_shutdown(async move {
            let _ = shutdown.await;
        })
        .await?;

    info!("Gateway shut down");
    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn schema_handler() -> Json<ParameterSchema> {
    Json(JobSearchCrew::schema())
}

#[derive(Serialize)]
struct KickoffResponse {
    result: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

async fn kickoff_handler(
    State(crew): State<SharedCrew>,
    body: Option<Json<Option<CriteriaUpdate>>>,
) -> Result<Json<KickoffResponse>, (StatusCode, Json<ErrorResponse>)> {
    // No body, or a JSON `null`, runs with the stored criteria.
    let update = body.and_then(|Json(update)| update).unwrap_or_default();
    match crew.kickoff(&update).await {
        Ok(result) => Ok(Json(KickoffResponse {
            result: result.text,
        })),
        Err(e) => {
            warn!(error = %e, "Kickoff failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use jobcrew_agent::WorkflowRunner;
    use jobcrew_core::{
        Crew, ExecutionError, Executor, SearchCriteria, TaskId, TaskOutput, WorkflowResult,
    };
    use tower::ServiceExt;

    /// Answers with the job title the crew was built for.
    struct EchoTitleExecutor;

    #[async_trait]
    impl Executor for EchoTitleExecutor {
        fn name(&self) -> &str {
            "echo"
        }

        async fn execute(&self, crew: &Crew) -> Result<WorkflowResult, ExecutionError> {
            let first = &crew.tasks[0].description;
            let title = if first.contains("Data Scientist") {
                "Data Scientist"
            } else {
                "Software Engineer"
            };
            WorkflowResult::from_outputs(vec![TaskOutput {
                task: TaskId::OpportunityCuration,
                agent_role: "curator".into(),
                text: format!("guide for {title}"),
            }])
            .ok_or(ExecutionError::EmptyCrew)
        }
    }

    struct DownExecutor;

    #[async_trait]
    impl Executor for DownExecutor {
        fn name(&self) -> &str {
            "down"
        }

        async fn execute(&self, _crew: &Crew) -> Result<WorkflowResult, ExecutionError> {
            Err(ExecutionError::Engine("provider unreachable".into()))
        }
    }

    fn test_crew(executor: Arc<dyn Executor>) -> SharedCrew {
        let base =
            SearchCriteria::new("Software Engineer", "San Francisco", "Senior", "Python, React, AWS");
        Arc::new(JobSearchCrew::new(base, WorkflowRunner::new(executor)))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn kickoff_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/kickoff")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = build_router(test_crew(Arc::new(EchoTitleExecutor)));

        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn schema_endpoint() {
        let app = build_router(test_crew(Arc::new(EchoTitleExecutor)));
        let req = Request::builder().uri("/schema").body(Body::empty()).unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_object().unwrap().len(), 8);
        assert_eq!(json["location"]["required"], true);
        assert_eq!(json["user_preferences"]["type"], "str");
    }

    #[tokio::test]
    async fn kickoff_with_empty_body_uses_base() {
        let app = build_router(test_crew(Arc::new(EchoTitleExecutor)));

        let response = app.oneshot(kickoff_request("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["result"], "guide for Software Engineer");
    }

    #[tokio::test]
    async fn kickoff_with_null_body_uses_base() {
        let app = build_router(test_crew(Arc::new(EchoTitleExecutor)));

        let response = app.oneshot(kickoff_request("null")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["result"], "guide for Software Engineer");
    }

    #[tokio::test]
    async fn kickoff_without_body_uses_base() {
        let app = build_router(test_crew(Arc::new(EchoTitleExecutor)));
        let req = Request::builder()
            .method("POST")
            .uri("/kickoff")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["result"], "guide for Software Engineer");
    }

    #[tokio::test]
    async fn kickoff_applies_overrides() {
        let app = build_router(test_crew(Arc::new(EchoTitleExecutor)));

        let response = app
            .oneshot(kickoff_request(r#"{"job_title": "Data Scientist", "unknown": "x"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["result"], "guide for Data Scientist");
    }

    #[tokio::test]
    async fn kickoff_rejects_non_string_values() {
        let app = build_router(test_crew(Arc::new(EchoTitleExecutor)));

        let response = app.oneshot(kickoff_request(r#"{"job_title": 7}"#)).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn kickoff_failure_is_bad_gateway() {
        let app = build_router(test_crew(Arc::new(DownExecutor)));

        let response = app.oneshot(kickoff_request("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("provider unreachable"));
    }

    #[tokio::test]
    async fn serve_stops_on_shutdown_signal() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(serve(listener, test_crew(Arc::new(EchoTitleExecutor)), rx));

        tx.send(()).unwrap();
        let served = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .expect("server did not stop")
            .unwrap();
        assert!(served.is_ok());
    }
}
