//! HTTP client tests against an in-process mock analysis service.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use clave_core::{
    testing::{fixtures, RecordingSurface},
    AnalysisClient, AnalysisError, Config, FailureKind, HttpAnalysisClient, ServerConfig,
    SubmissionController, SubmissionState, SubmitOutcome, TimeoutConfig,
};

type Received = Arc<Mutex<Vec<Value>>>;

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client_for(base_url: &str, timeout_secs: u64) -> HttpAnalysisClient {
    let config = Config {
        server: ServerConfig {
            base_url: base_url.to_string(),
        },
        timeouts: TimeoutConfig {
            connect_secs: timeout_secs,
            read_secs: timeout_secs,
            write_secs: timeout_secs,
        },
    };
    HttpAnalysisClient::new(&config).unwrap()
}

fn analyze_backend(status: StatusCode, body: Value) -> (Router, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));

    async fn handler(
        State((received, status, body)): State<(Received, StatusCode, Value)>,
        Json(request): Json<Value>,
    ) -> impl IntoResponse {
        received.lock().unwrap().push(request);
        (status, Json(body))
    }

    let router = Router::new()
        .route("/api/analyze", post(handler))
        .with_state((received.clone(), status, body));
    (router, received)
}

#[tokio::test]
async fn test_analyze_success() {
    let (router, received) =
        analyze_backend(StatusCode::OK, fixtures::response_json("positive", 0.92, "3/3"));
    let base_url = spawn_backend(router).await;
    let client = client_for(&base_url, 5);

    let model = client.analyze("I am so happy today").await.unwrap();

    assert_eq!(model.sentiment, "positive");
    assert_eq!(model.confidence, 0.92);
    assert_eq!(model.consistency_info.num_calls, 3);
    assert_eq!(model.analysis.key_expression.as_deref(), Some("#happy"));

    let received = received.lock().unwrap().clone();
    assert_eq!(received, vec![json!({ "text": "I am so happy today" })]);
}

#[tokio::test]
async fn test_client_sends_text_unvalidated() {
    // Length enforcement belongs to the controller.
    let (router, received) =
        analyze_backend(StatusCode::OK, fixtures::response_json("neutral", 0.5, "2/3"));
    let base_url = spawn_backend(router).await;
    let client = client_for(&base_url, 5);

    let long_text = "a".repeat(250);
    client.analyze(&long_text).await.unwrap();

    let received = received.lock().unwrap().clone();
    assert_eq!(received[0]["text"].as_str().unwrap().len(), 250);
}

#[tokio::test]
async fn test_analyze_server_error() {
    let (router, _) = analyze_backend(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "detail": "all model calls failed" }),
    );
    let base_url = spawn_backend(router).await;
    let client = client_for(&base_url, 5);

    let err = client.analyze("hola").await.unwrap_err();

    assert_eq!(
        err,
        AnalysisError::Server {
            status: 500,
            detail: Some("all model calls failed".to_string()),
        }
    );
}

#[tokio::test]
async fn test_analyze_malformed_body() {
    let (router, _) = analyze_backend(StatusCode::OK, json!({ "sentiment": "positive" }));
    let base_url = spawn_backend(router).await;
    let client = client_for(&base_url, 5);

    let err = client.analyze("hola").await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Protocol);
    assert!(err.to_string().contains("confidence"), "got {}", err);
}

#[tokio::test]
async fn test_analyze_non_json_body() {
    let router = Router::new().route(
        "/api/analyze",
        post(|| async { (StatusCode::OK, "<html>proxy page</html>") }),
    );
    let base_url = spawn_backend(router).await;
    let client = client_for(&base_url, 5);

    let err = client.analyze("hola").await.unwrap_err();
    assert!(matches!(err, AnalysisError::Protocol(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_analyze_timeout() {
    let router = Router::new().route(
        "/api/analyze",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Json(fixtures::response_json("positive", 0.9, "3/3"))
        }),
    );
    let base_url = spawn_backend(router).await;
    let client = client_for(&base_url, 1);

    let started = std::time::Instant::now();
    let err = client.analyze("hola").await.unwrap_err();

    assert!(err.is_timeout(), "got {:?}", err);
    assert_eq!(err.kind(), FailureKind::Network);
    assert!(started.elapsed() < Duration::from_secs(8));
}

#[tokio::test]
async fn test_health() {
    let router = Router::new().route(
        "/api/health",
        get(|| async {
            Json(json!({
                "status": "healthy",
                "service": "Clave Sentiment Analysis API",
                "model": "gemini-2.5-flash-exp",
                "num_calls": 3
            }))
        }),
    );
    let base_url = spawn_backend(router).await;
    let client = client_for(&base_url, 5);

    let health = client.health().await.unwrap();
    assert!(health.is_healthy());
    assert_eq!(health.model.as_deref(), Some("gemini-2.5-flash-exp"));
}

#[tokio::test]
async fn test_controller_over_http_end_to_end() {
    let (router, received) =
        analyze_backend(StatusCode::OK, fixtures::response_json("negative", 0.873, "2/3"));
    let base_url = spawn_backend(router).await;

    let surface = Arc::new(RecordingSurface::new());
    let controller =
        SubmissionController::new(Arc::new(client_for(&base_url, 5)), surface.clone());

    let outcome = controller.submit("  Estoy so tired of this  ").await;

    assert!(matches!(outcome, SubmitOutcome::Completed(_)));
    assert_eq!(controller.state(), SubmissionState::Idle);
    assert_eq!(
        received.lock().unwrap()[0],
        json!({ "text": "Estoy so tired of this" })
    );

    let navigations = surface.navigations();
    assert_eq!(navigations.len(), 1);
    assert_eq!(navigations[0].sentiment, "negative");
    assert_eq!(navigations[0].agreement, "2/3");
}
