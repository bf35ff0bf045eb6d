use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ProviderError, TranscriptionProvider};
use crate::domain::JobStatus;

/// Backoff and attempt budget for the poll loop. Intervals are front-loaded:
/// most short clips transcribe within a few seconds, so early polls are fast
/// and later ones slow down toward the cap.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub initial_interval: Duration,
    pub multiplier: f64,
    pub max_interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_millis(1000),
            multiplier: 1.5,
            max_interval: Duration::from_millis(4000),
            max_attempts: 12,
        }
    }
}

/// Drives one transcription job from submission to a terminal state:
/// submit, then sleep / poll with growing intervals until the provider
/// reports `completed` or `error`, or the attempt budget runs out.
pub struct PollingOrchestrator<P>
where
    P: TranscriptionProvider,
{
    provider: Arc<P>,
    policy: PollPolicy,
}

impl<P> PollingOrchestrator<P>
where
    P: TranscriptionProvider,
{
    pub fn new(provider: Arc<P>, policy: PollPolicy) -> Self {
        Self { provider, policy }
    }

    pub async fn run(&self, audio_url: &str) -> Result<String, PollingError> {
        let job = self
            .provider
            .submit(audio_url)
            .await
            .map_err(PollingError::Submission)?;

        tracing::debug!(job_id = %job.id, status = %job.status, "Transcription job submitted");

        let mut interval = self.policy.initial_interval;
        for attempt in 1..=self.policy.max_attempts {
            tokio::time::sleep(interval).await;

            let update = self
                .provider
                .poll(&job.id)
                .await
                .map_err(PollingError::Poll)?;

            match update.status {
                JobStatus::Completed => {
                    tracing::info!(job_id = %job.id, attempts = attempt, "Transcription completed");
                    return update.text.ok_or(PollingError::MissingTranscript);
                }
                JobStatus::Error => {
                    let reason = update
                        .error
                        .unwrap_or_else(|| "unknown provider error".to_string());
                    tracing::warn!(job_id = %job.id, reason = %reason, "Transcription job failed");
                    return Err(PollingError::JobFailed(reason));
                }
                JobStatus::Queued | JobStatus::Processing => {
                    tracing::debug!(
                        job_id = %job.id,
                        status = %update.status,
                        attempt = attempt,
                        waited_ms = interval.as_millis() as u64,
                        "Transcription still in progress"
                    );
                    interval = interval
                        .mul_f64(self.policy.multiplier)
                        .min(self.policy.max_interval);
                }
            }
        }

        Err(PollingError::AttemptsExhausted(self.policy.max_attempts))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PollingError {
    #[error("{0}")]
    Submission(ProviderError),
    #[error("{0}")]
    Poll(ProviderError),
    #[error("transcription job failed: {0}")]
    JobFailed(String),
    #[error("provider reported completion without a transcript")]
    MissingTranscript,
    #[error("transcription did not finish after {0} status checks")]
    AttemptsExhausted(u32),
}
