use async_trait::async_trait;

use crate::domain::TranscriptionJob;

/// Asynchronous speech-to-text provider. `submit` creates a remote job,
/// `poll` is a single status check. All retry and backoff policy lives in
/// the polling orchestrator, not here.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    async fn submit(&self, audio_url: &str) -> Result<TranscriptionJob, ProviderError>;

    async fn poll(&self, job_id: &str) -> Result<TranscriptionJob, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("transcription submission rejected: {0}")]
    SubmissionRejected(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}
