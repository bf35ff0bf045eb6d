use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AssetResolver, TranscriptionProvider};
use crate::application::services::TranscribeError;
use crate::presentation::extract::ClientIp;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct TranscribeRequest {
    pub url: Option<String>,
}

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub success: bool,
    pub transcription: String,
    pub cached: bool,
    pub duration: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn transcribe_handler<R, P>(
    State(state): State<AppState<R, P>>,
    client_ip: ClientIp,
    Json(request): Json<TranscribeRequest>,
) -> impl IntoResponse
where
    R: AssetResolver + 'static,
    P: TranscriptionProvider + 'static,
{
    let started = Instant::now();

    match state
        .transcription_service
        .transcribe(&client_ip.0, request.url.as_deref())
        .await
    {
        Ok(outcome) => {
            let elapsed = started.elapsed();
            tracing::info!(
                cached = outcome.cached,
                elapsed_ms = elapsed.as_millis() as u64,
                "Transcription request served"
            );
            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    success: true,
                    transcription: outcome.transcript,
                    cached: outcome.cached,
                    duration: format!("{:.1}s", elapsed.as_secs_f64()),
                }),
            )
                .into_response()
        }
        Err(e) => {
            let status = match &e {
                TranscribeError::MissingUrl => StatusCode::BAD_REQUEST,
                TranscribeError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                TranscribeError::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            if status.is_server_error() {
                tracing::error!(error = %e, "Transcription request failed");
            } else {
                tracing::warn!(error = %e, "Transcription request rejected");
            }
            (
                status,
                Json(ErrorResponse {
                    success: false,
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
