use axum::Router;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use tikscribe::application::ports::{ProviderError, TranscriptionProvider};
use tikscribe::domain::JobStatus;
use tikscribe::infrastructure::provider::AssemblyAiClient;

async fn start_mock_provider(app: Router) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn static_response(status: u16, body: &'static str) -> impl IntoResponse {
    (axum::http::StatusCode::from_u16(status).unwrap(), body)
}

#[tokio::test]
async fn given_accepted_submission_when_submitting_then_returns_queued_job() {
    let app = Router::new().route(
        "/transcript",
        post(|| async { static_response(200, r#"{"id": "t-123", "status": "queued"}"#) }),
    );
    let (base_url, shutdown_tx) = start_mock_provider(app).await;

    let client = AssemblyAiClient::new(&base_url, "test-key".to_string());
    let job = client
        .submit("https://cdn.example.com/video.mp4")
        .await
        .unwrap();

    assert_eq!(job.id, "t-123");
    assert_eq!(job.status, JobStatus::Queued);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_provider_error_body_when_submitting_then_submission_is_rejected_with_reason() {
    let app = Router::new().route(
        "/transcript",
        post(|| async { static_response(400, r#"{"error": "Audio URL is unreachable"}"#) }),
    );
    let (base_url, shutdown_tx) = start_mock_provider(app).await;

    let client = AssemblyAiClient::new(&base_url, "test-key".to_string());
    let result = client.submit("https://cdn.example.com/video.mp4").await;

    match result {
        Err(ProviderError::SubmissionRejected(reason)) => {
            assert_eq!(reason, "Audio URL is unreachable")
        }
        other => panic!("expected SubmissionRejected, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_json_server_failure_when_submitting_then_api_request_error() {
    let app = Router::new().route(
        "/transcript",
        post(|| async { static_response(500, "Internal Server Error") }),
    );
    let (base_url, shutdown_tx) = start_mock_provider(app).await;

    let client = AssemblyAiClient::new(&base_url, "test-key".to_string());
    let result = client.submit("https://cdn.example.com/video.mp4").await;

    match result {
        Err(ProviderError::ApiRequestFailed(reason)) => assert!(reason.contains("500")),
        other => panic!("expected ApiRequestFailed, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_completed_job_when_polling_then_returns_status_and_text() {
    let app = Router::new().route(
        "/transcript/{id}",
        get(|| async {
            static_response(
                200,
                r#"{"id": "t-123", "status": "completed", "text": "Hello from AssemblyAI"}"#,
            )
        }),
    );
    let (base_url, shutdown_tx) = start_mock_provider(app).await;

    let client = AssemblyAiClient::new(&base_url, "test-key".to_string());
    let job = client.poll("t-123").await.unwrap();

    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.text.as_deref(), Some("Hello from AssemblyAI"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_failed_job_when_polling_then_returns_error_status_with_reason() {
    let app = Router::new().route(
        "/transcript/{id}",
        get(|| async {
            static_response(
                200,
                r#"{"id": "t-123", "status": "error", "error": "download failed"}"#,
            )
        }),
    );
    let (base_url, shutdown_tx) = start_mock_provider(app).await;

    let client = AssemblyAiClient::new(&base_url, "test-key".to_string());
    let job = client.poll("t-123").await.unwrap();

    assert_eq!(job.status, JobStatus::Error);
    assert_eq!(job.error.as_deref(), Some("download failed"));
    shutdown_tx.send(()).ok();
}
